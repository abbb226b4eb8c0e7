//! 标签处理上下文
//!
//! 封装"我正在处理这批中的第几个文件"这一信息

use std::fmt::Display;

/// 标签处理上下文
#[derive(Debug, Clone)]
pub struct LabelCtx {
    /// 文件在批次中的序号（从1开始）
    pub file_index: usize,

    /// 批次文件总数
    pub total_files: usize,

    /// 文件名
    pub file_name: String,
}

impl LabelCtx {
    pub fn new(file_index: usize, total_files: usize, file_name: impl Into<String>) -> Self {
        Self {
            file_index,
            total_files,
            file_name: file_name.into(),
        }
    }
}

impl Display for LabelCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[标签 {}/{} {}]",
            self.file_index, self.total_files, self.file_name
        )
    }
}
