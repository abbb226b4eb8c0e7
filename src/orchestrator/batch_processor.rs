//! 批量标签处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **顺序处理**：严格按选择顺序逐个处理，前一个完成后才开始下一个
//! 2. **结果收集**：每个文件一条结果，按文件顺序追加
//! 3. **进度统计**：每完成一个文件重新计算进度并回调
//!
//! 单个文件失败不会中断批次；没有取消、重试或并发。

use crate::config::Config;
use crate::error::ConfigError;
use crate::models::label::{ProcessingResult, UploadBatch};
use crate::models::progress::{BatchProgress, BatchReport};
use crate::utils::logging::log_batch_start;
use crate::workflow::{LabelCtx, LabelFlow};
use chrono::Local;
use tracing::info;

/// 批量标签处理器
pub struct BatchProcessor {
    flow: LabelFlow,
}

impl BatchProcessor {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_flow(LabelFlow::new(config)?))
    }

    pub fn with_flow(flow: LabelFlow) -> Self {
        Self { flow }
    }

    pub fn flow(&self) -> &LabelFlow {
        &self.flow
    }

    /// 处理整个批次
    pub async fn run(&self, batch: UploadBatch) -> BatchReport {
        self.run_with_progress(batch, |_, _| {}).await
    }

    /// 处理整个批次，每完成一个文件调用一次 `on_progress`
    pub async fn run_with_progress<F>(&self, batch: UploadBatch, mut on_progress: F) -> BatchReport
    where
        F: FnMut(&ProcessingResult, &BatchProgress),
    {
        let started_at = Local::now();
        let total = batch.len();
        let mut progress = BatchProgress::start(total);
        let mut results = Vec::with_capacity(total);

        log_batch_start(total);

        for (idx, file) in batch.into_iter().enumerate() {
            let ctx = LabelCtx::new(idx + 1, total, file.name.clone());
            info!("{} 📄 开始处理", ctx);

            let result = self.flow.run(file, &ctx).await;

            progress.advance();
            info!("{} 进度: {}%", ctx, progress.rounded());
            on_progress(&result, &progress);
            results.push(result);
        }

        BatchReport {
            results,
            progress,
            started_at,
            finished_at: Local::now(),
        }
    }
}
