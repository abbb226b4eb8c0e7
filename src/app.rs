use crate::api::{self, ApiState};
use crate::config::Config;
use crate::models::load_label_batch;
use crate::orchestrator::BatchProcessor;
use crate::utils::logging::{log_startup, print_final_stats};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    processor: BatchProcessor,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let processor = BatchProcessor::new(&config).context("无法初始化标签处理流程")?;

        Ok(Self { config, processor })
    }

    /// 运行应用主逻辑
    ///
    /// 配置了标签目录时处理一次后退出，否则启动 HTTP 服务
    pub async fn run(self) -> Result<()> {
        match self.config.label_folder.clone() {
            Some(folder) => self.run_folder(&folder).await,
            None => {
                let state = ApiState::new(self.processor);
                api::serve(&self.config.listen_addr, state).await
            }
        }
    }

    /// 处理目录中的所有标签
    async fn run_folder(&self, folder: &str) -> Result<()> {
        info!("\n📁 正在扫描待处理的标签...");
        let batch = load_label_batch(folder).await?;

        if batch.is_empty() {
            warn!("⚠️ 没有找到待处理的 PDF 文件，程序结束");
            return Ok(());
        }

        info!("✓ 找到 {} 个待处理的标签", batch.len());

        let report = self.processor.run(batch).await;
        print_final_stats(&report);

        Ok(())
    }
}
