pub mod fulfillment;
pub mod label_ctx;
pub mod label_flow;
pub mod shipment_saga;

pub use fulfillment::{FulfillmentFlow, FulfillmentOutcome};
pub use label_ctx::LabelCtx;
pub use label_flow::{LabelFlow, MSG_ORDER_NOT_FOUND, MSG_ORDER_PROCESSED};
pub use shipment_saga::ShipmentSaga;
