use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::labels::upload_labels;
use crate::api::process_order::process_order;
use crate::api::ApiState;

/// 单次上传的大小上限
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/process-order", post(process_order))
        .route(
            "/api/labels",
            post(upload_labels).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .with_state(state)
}

/// 启动 HTTP 服务
pub async fn serve(listen_addr: &str, state: ApiState) -> Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("无法监听地址: {}", listen_addr))?;

    info!("🌐 HTTP 服务已启动: {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("HTTP 服务异常退出")?;

    Ok(())
}
