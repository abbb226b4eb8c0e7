pub mod label;
pub mod loaders;
pub mod order;
pub mod progress;

pub use label::{LabelFile, ProcessStatus, ProcessingResult, UploadBatch};
pub use loaders::{load_label_batch, load_label_file};
pub use order::{FulfillmentReport, OrdersResponse, StepOutcome, AWAITING_SHIPMENT};
pub use progress::{BatchProgress, BatchReport};
