#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use label_processor::error::ExtractionError;
use label_processor::services::TextExtractor;
use label_processor::{BatchProcessor, Config, LabelFlow};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// 代理收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

/// 模拟代理的响应设置和请求记录
#[derive(Debug)]
pub struct ProxyState {
    pub orders: Value,
    pub orders_status: u16,
    pub mark_status: u16,
    pub assign_status: u16,
    pub calls: Vec<RecordedCall>,
}

impl Default for ProxyState {
    fn default() -> Self {
        Self {
            orders: json!({ "orders": [] }),
            orders_status: 200,
            mark_status: 200,
            assign_status: 200,
            calls: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<ProxyState>>;

/// 本地启动的模拟 ShipStation 代理
pub struct MockProxy {
    pub base_url: String,
    state: Shared,
}

impl MockProxy {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(ProxyState::default()));

        let app = Router::new()
            .route("/orders", get(list_orders))
            .route("/orders/markasshipped", post(mark_shipped))
            .route("/orders/assignuser", post(assign_user))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// 设置 `GET /orders` 返回的订单列表
    pub fn with_orders(self, orders: Value) -> Self {
        self.state.lock().unwrap().orders = json!({ "orders": orders });
        self
    }

    pub fn with_orders_status(self, status: u16) -> Self {
        self.state.lock().unwrap().orders_status = status;
        self
    }

    pub fn with_mark_status(self, status: u16) -> Self {
        self.state.lock().unwrap().mark_status = status;
        self
    }

    pub fn with_assign_status(self, status: u16) -> Self {
        self.state.lock().unwrap().assign_status = status;
        self
    }

    pub fn config(&self) -> Config {
        Config::with_proxy(&self.base_url)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// 使用假文本提取器的批处理器
    pub fn processor(&self) -> BatchProcessor {
        let flow = LabelFlow::with_extractor(&self.config(), Arc::new(FakeExtractor)).unwrap();
        BatchProcessor::with_flow(flow)
    }
}

fn record(state: &Shared, path: &str, query: Option<String>, body: Value) -> ProxyState {
    let mut guard = state.lock().unwrap();
    guard.calls.push(RecordedCall {
        path: path.to_string(),
        query,
        body,
    });
    ProxyState {
        orders: guard.orders.clone(),
        orders_status: guard.orders_status,
        mark_status: guard.mark_status,
        assign_status: guard.assign_status,
        calls: Vec::new(),
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

async fn list_orders(State(state): State<Shared>, RawQuery(query): RawQuery) -> (StatusCode, Json<Value>) {
    let snapshot = record(&state, "/orders", query, Value::Null);
    (status(snapshot.orders_status), Json(snapshot.orders))
}

async fn mark_shipped(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let snapshot = record(&state, "/orders/markasshipped", None, body);
    (status(snapshot.mark_status), Json(json!({ "ok": true })))
}

async fn assign_user(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let snapshot = record(&state, "/orders/assignuser", None, body);
    (
        status(snapshot.assign_status),
        Json(json!({ "success": true, "message": "Assigned" })),
    )
}

/// 把文件内容直接当作 UTF-8 文本；以 `BROKEN` 开头视为损坏的 PDF
pub struct FakeExtractor;

impl TextExtractor for FakeExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.starts_with(b"BROKEN") {
            return Err(ExtractionError::UnreadablePdf {
                file: String::new(),
                reason: "invalid file header".to_string(),
            });
        }
        Ok(String::from_utf8_lossy(bytes).to_string())
    }
}

/// 生成只有一页、一行文字的最小 PDF（Helvetica，xref 偏移按实际字节计算）
pub fn minimal_pdf(text: &str) -> Vec<u8> {
    let stream = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

/// 启动应用自身的 HTTP 路由，返回基础地址
pub async fn start_app(processor: BatchProcessor) -> String {
    let app = label_processor::api::router(label_processor::api::ApiState::new(processor));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
