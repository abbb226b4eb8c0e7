//! API 模块
//!
//! 对外提供的 HTTP 接口

pub mod labels;
pub mod process_order;
pub mod server;

use std::sync::Arc;

use crate::orchestrator::BatchProcessor;
use crate::workflow::FulfillmentFlow;

/// 路由共享状态
#[derive(Clone)]
pub struct ApiState {
    pub processor: Arc<BatchProcessor>,
}

impl ApiState {
    pub fn new(processor: BatchProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    pub fn fulfillment(&self) -> &FulfillmentFlow {
        self.processor.flow().fulfillment()
    }
}

pub use server::{router, serve};
