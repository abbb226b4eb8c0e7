//! 标签文件与单个文件的处理结果

use crate::models::order::FulfillmentReport;
use serde::Serialize;

/// 一个上传的标签文件
#[derive(Debug, Clone)]
pub struct LabelFile {
    /// 文件名（去掉 `.pdf` 后就是运单号）
    pub name: String,
    /// 文件内容
    pub content: Vec<u8>,
}

impl LabelFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// 一次上传的全部文件，保持选择顺序
pub type UploadBatch = Vec<LabelFile>;

/// 处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Success,
    Failure,
}

/// 单个文件的处理结果，创建后不再修改
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub file_name: String,
    pub status: ProcessStatus,
    pub message: String,
    /// 发货步骤明细；没走到发货这一步时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment: Option<FulfillmentReport>,
}

impl ProcessingResult {
    pub fn success(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            status: ProcessStatus::Success,
            message: message.into(),
            fulfillment: None,
        }
    }

    /// 失败结果；消息为空时使用通用提示
    pub fn failure(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Unknown error occurred".to_string()
        } else {
            message
        };
        Self {
            file_name: file_name.into(),
            status: ProcessStatus::Failure,
            message,
            fulfillment: None,
        }
    }

    pub fn with_fulfillment(mut self, report: FulfillmentReport) -> Self {
        self.fulfillment = Some(report);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == ProcessStatus::Success
    }
}
