//! # Label Processor
//!
//! 批量读取运单标签 PDF，提取订单号和运单号，通过 ShipStation 代理把订单标记为已发货
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services / Clients）
//! - `services::identifier` - 文件名 → 运单号，文本 → 订单号（可扩展的规则匹配器）
//! - `services::text_extractor` - PDF → 文本
//! - `clients::ShipstationClient` - 查订单 / 标记发货 / 分配用户
//!
//! ### ② 流程层（Workflow）
//! - `ShipmentSaga` - 标记发货 → 分配用户，逐步记录结果
//! - `FulfillmentFlow` - 查订单 → 两步发货
//! - `LabelFlow` - 单个标签文件的完整流程
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator::BatchProcessor` - 顺序处理整批文件，收集结果和进度
//!
//! ### ④ 接口层（API）
//! - `POST /api/process-order` - 单个订单
//! - `POST /api/labels` - 上传一批标签
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::ShipstationClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{BatchProgress, BatchReport, LabelFile, ProcessStatus, ProcessingResult};
pub use orchestrator::BatchProcessor;
pub use workflow::{FulfillmentFlow, FulfillmentOutcome, LabelFlow};
