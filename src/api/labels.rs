//! `POST /api/labels`
//!
//! multipart 表单中每个带文件名的字段都是一个标签，按上传顺序处理

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::process_order::error_response;
use crate::api::ApiState;
use crate::models::label::{LabelFile, ProcessingResult, UploadBatch};
use crate::services::is_pdf;
use crate::utils::logging::print_final_stats;

pub async fn upload_labels(State(state): State<ApiState>, mut multipart: Multipart) -> Response {
    let mut batch: UploadBatch = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("读取上传表单失败: {}", e);
                return bad_upload("Invalid multipart upload");
            }
        };

        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);

        let content = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                warn!("读取文件 {} 失败: {}", file_name, e);
                return bad_upload("Invalid multipart upload");
            }
        };

        if !is_pdf(content_type.as_deref(), &content) {
            warn!("⚠️ {} 看起来不是 PDF，仍尝试处理", file_name);
        }

        batch.push(LabelFile::new(file_name, content));
    }

    if batch.is_empty() {
        return bad_upload("No files uploaded");
    }

    info!("📥 收到 {} 个标签文件", batch.len());

    let report = state.processor.run(batch).await;
    print_final_stats(&report);

    let response = UploadResponse {
        success_count: report.success_count(),
        failure_count: report.failure_count(),
        progress: report.progress.rounded(),
        results: report.results,
    };

    (StatusCode::OK, Json(response)).into_response()
}

fn bad_upload(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message).into_response()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    results: Vec<ProcessingResult>,
    progress: u8,
    success_count: usize,
    failure_count: usize,
}
