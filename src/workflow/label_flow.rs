//! 标签处理流程 - 流程层
//!
//! 核心职责：定义"一个标签文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 文件名 → 运单号
//! 2. PDF → 文本 → 订单号
//! 3. 查订单 → 标记发货 → 分配用户
//!
//! 任何一步失败都只产生一条失败结果，不会中断批次

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::ShipstationClient;
use crate::config::Config;
use crate::error::{AppError, ConfigError, ExtractionError};
use crate::models::label::{LabelFile, ProcessingResult};
use crate::services::{
    extract_text_blocking, extract_tracking_number, OrderNumberMatcher, PdfTextExtractor,
    TextExtractor,
};
use crate::workflow::fulfillment::{FulfillmentFlow, FulfillmentOutcome};
use crate::workflow::label_ctx::LabelCtx;

pub const MSG_ORDER_PROCESSED: &str = "Order processed successfully";
pub const MSG_ORDER_NOT_FOUND: &str = "Order not found";

/// 标签处理流程
///
/// - 编排单个文件的完整处理流程
/// - 不持有批次状态（结果列表、进度）
pub struct LabelFlow {
    extractor: Arc<dyn TextExtractor>,
    matcher: OrderNumberMatcher,
    fulfillment: FulfillmentFlow,
    verbose_logging: bool,
}

impl LabelFlow {
    /// 使用 PDF 提取器创建流程
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::with_extractor(config, Arc::new(PdfTextExtractor::new()))
    }

    /// 使用自定义文本提取器创建流程
    pub fn with_extractor(
        config: &Config,
        extractor: Arc<dyn TextExtractor>,
    ) -> Result<Self, ConfigError> {
        let matcher = if config.extra_order_patterns.is_empty() {
            OrderNumberMatcher::standard()
        } else {
            OrderNumberMatcher::with_custom_patterns(config.extra_order_patterns.clone())?
        };

        Ok(Self {
            extractor,
            matcher,
            fulfillment: FulfillmentFlow::new(ShipstationClient::new(config)),
            verbose_logging: config.verbose_logging,
        })
    }

    pub fn fulfillment(&self) -> &FulfillmentFlow {
        &self.fulfillment
    }

    /// 处理单个标签文件，总是返回一条结果
    pub async fn run(&self, file: LabelFile, ctx: &LabelCtx) -> ProcessingResult {
        let file_name = file.name.clone();

        match self.try_run(file, ctx).await {
            Ok(result) => result,
            Err(e) => {
                warn!("{} ❌ {}", ctx, e);
                ProcessingResult::failure(file_name, e.to_string())
            }
        }
    }

    async fn try_run(&self, file: LabelFile, ctx: &LabelCtx) -> Result<ProcessingResult, AppError> {
        let LabelFile { name, content } = file;

        let tracking_number =
            extract_tracking_number(&name).ok_or(ExtractionError::TrackingNumberMissing)?;

        let text = extract_text_blocking(Arc::clone(&self.extractor), &name, content).await?;
        self.log_text(ctx, &text);

        let order_number = self
            .matcher
            .find(&text)
            .ok_or(ExtractionError::OrderNumberMissing)?;

        info!(
            "{} 🔍 订单号: {} | 运单号: {}",
            ctx, order_number, tracking_number
        );

        match self
            .fulfillment
            .fulfill(&order_number, &tracking_number)
            .await?
        {
            FulfillmentOutcome::OrderNotFound => {
                warn!("{} ⚠️ 订单 {} 未找到", ctx, order_number);
                Ok(ProcessingResult::failure(name, MSG_ORDER_NOT_FOUND))
            }
            FulfillmentOutcome::Shipped(report) if report.is_complete() => {
                info!("{} ✓ 处理成功", ctx);
                Ok(ProcessingResult::success(name, MSG_ORDER_PROCESSED).with_fulfillment(report))
            }
            FulfillmentOutcome::Shipped(report) => {
                let message = report.first_error().unwrap_or_default().to_string();
                warn!("{} ❌ 发货流程未完成: {}", ctx, message);
                Ok(ProcessingResult::failure(name, message).with_fulfillment(report))
            }
        }
    }

    // ========== 日志辅助方法 ==========

    /// 显示文本预览
    fn log_text(&self, ctx: &LabelCtx, text: &str) {
        if !self.verbose_logging {
            return;
        }
        let preview = crate::utils::logging::truncate_text(text.trim(), 80);
        info!("{} 文本: {}", ctx, preview);
    }
}
