/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::progress::BatchReport;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能重复初始化，忽略错误
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 标签批量发货");
    info!("🔗 代理地址: {}", config.proxy_base_url);
    match &config.label_folder {
        Some(folder) => info!("📁 标签目录: {}", folder),
        None => info!("🌐 监听地址: {}", config.listen_addr),
    }
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
pub fn log_batch_start(total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理批次: 共 {} 个标签", total);
    info!("💡 逐个处理，单个失败不影响后续文件");
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(report: &BatchReport) {
    let elapsed = report.finished_at - report.started_at;

    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!("完成时间: {}", report.finished_at.format("%Y-%m-%d %H:%M:%S"));
    info!("耗时: {} ms", elapsed.num_milliseconds());
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", report.success_count(), report.results.len());
    info!("❌ 失败: {}", report.failure_count());
    for result in report.results.iter().filter(|r| !r.is_success()) {
        warn!("   {}: {}", result.file_name, result.message);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
