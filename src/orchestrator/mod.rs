//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 UploadBatch)
//!     ↓
//! workflow::LabelFlow (处理单个 LabelFile)
//!     ↓
//! workflow::FulfillmentFlow / ShipmentSaga (查订单、两步发货)
//!     ↓
//! services (能力层：运单号 / 订单号 / PDF 文本) + clients (代理 API)
//! ```
//!
//! 编排层只做调度和统计，不做具体业务判断

pub mod batch_processor;

pub use batch_processor::BatchProcessor;
