//! PDF 文本提取服务 - 业务能力层
//!
//! 只负责"把 PDF 字节变成文本"，不关心订单号规则

use crate::error::ExtractionError;
use std::sync::Arc;
use tracing::debug;

/// 文本提取能力
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// 基于 `pdf-extract` 的实现
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ExtractionError::UnreadablePdf {
                file: String::new(),
                reason: e.to_string(),
            }
        })?;
        debug!("PDF 文本提取完成，长度: {} 字符", text.chars().count());
        Ok(text)
    }
}

/// 在阻塞线程池中提取文本
///
/// pdf-extract 遇到异常文件可能 panic，这里统一转成 `UnreadablePdf`
pub async fn extract_text_blocking(
    extractor: Arc<dyn TextExtractor>,
    file_name: &str,
    content: Vec<u8>,
) -> Result<String, ExtractionError> {
    let result = tokio::task::spawn_blocking(move || extractor.extract_text(&content)).await;

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(ExtractionError::UnreadablePdf { reason, .. })) => {
            Err(ExtractionError::UnreadablePdf {
                file: file_name.to_string(),
                reason,
            })
        }
        Ok(Err(other)) => Err(other),
        Err(join_err) => Err(ExtractionError::UnreadablePdf {
            file: file_name.to_string(),
            reason: if join_err.is_panic() {
                "PDF parser panicked".to_string()
            } else {
                join_err.to_string()
            },
        }),
    }
}

/// 通过 Content-Type 或文件头判断是否为 PDF
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}
