//! `POST /api/process-order`
//!
//! 请求体 `{orderNumber, trackingNumber}`，状态码：
//! - 400 任一字段缺失或为假值
//! - 500 请求体不是 JSON，或是 JSON `null`
//! - 404 没有待发货订单
//! - 200 处理成功
//! - 500 其他任何失败（细节只写日志，不返回给调用方）

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::api::ApiState;
use crate::workflow::{FulfillmentOutcome, MSG_ORDER_NOT_FOUND, MSG_ORDER_PROCESSED};

pub const MSG_FIELDS_REQUIRED: &str = "Both order number and tracking number are required";
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

pub type JsonResponse = (StatusCode, Json<Value>);

pub async fn process_order(State(state): State<ApiState>, body: Bytes) -> JsonResponse {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            error!("Error processing order: 请求体不是合法 JSON: {}", e);
            return internal_error();
        }
    };

    if payload.is_null() {
        error!("Error processing order: 请求体为 null");
        return internal_error();
    }

    let order_number = required_field(&payload, "orderNumber");
    let tracking_number = required_field(&payload, "trackingNumber");

    let (Some(order_number), Some(tracking_number)) = (order_number, tracking_number) else {
        return error_response(StatusCode::BAD_REQUEST, MSG_FIELDS_REQUIRED);
    };

    info!("📨 处理订单 {} (运单号: {})", order_number, tracking_number);

    match state
        .fulfillment()
        .fulfill(&order_number, &tracking_number)
        .await
    {
        Ok(FulfillmentOutcome::OrderNotFound) => {
            error_response(StatusCode::NOT_FOUND, MSG_ORDER_NOT_FOUND)
        }
        Ok(FulfillmentOutcome::Shipped(report)) if report.is_complete() => (
            StatusCode::OK,
            Json(json!({ "message": MSG_ORDER_PROCESSED })),
        ),
        Ok(FulfillmentOutcome::Shipped(report)) => {
            error!(
                "Error processing order {}: {} (已发货: {})",
                order_number,
                report.first_error().unwrap_or_default(),
                report.is_partially_applied()
            );
            internal_error()
        }
        Err(e) => {
            error!("Error processing order {}: {}", order_number, e);
            internal_error()
        }
    }
}

/// 按 JavaScript 真值规则取字段；空字符串、0、false、null 视为缺失
///
/// 数组和对象是真值，按 JSON 文本传下去
fn required_field(payload: &Value, name: &str) -> Option<String> {
    match payload.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
        _ => None,
    }
}

pub fn error_response(status: StatusCode, message: &str) -> JsonResponse {
    (status, Json(json!({ "error": message })))
}

fn internal_error() -> JsonResponse {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_falsy_values() {
        let payload = json!({
            "a": "",
            "b": 0,
            "c": false,
            "d": null,
            "e": "123456789",
            "f": 654321
        });
        assert_eq!(required_field(&payload, "a"), None);
        assert_eq!(required_field(&payload, "b"), None);
        assert_eq!(required_field(&payload, "c"), None);
        assert_eq!(required_field(&payload, "d"), None);
        assert_eq!(required_field(&payload, "missing"), None);
        assert_eq!(required_field(&payload, "e").as_deref(), Some("123456789"));
        assert_eq!(required_field(&payload, "f").as_deref(), Some("654321"));
    }

    #[test]
    fn test_required_field_truthy_non_strings() {
        let payload = json!({
            "t": true,
            "arr": [],
            "obj": { "id": 1 },
            "neg": -1.5
        });
        assert_eq!(required_field(&payload, "t").as_deref(), Some("true"));
        assert_eq!(required_field(&payload, "arr").as_deref(), Some("[]"));
        assert_eq!(required_field(&payload, "obj").as_deref(), Some(r#"{"id":1}"#));
        assert_eq!(required_field(&payload, "neg").as_deref(), Some("-1.5"));
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        assert_eq!(required_field(&json!([1, 2]), "orderNumber"), None);
    }
}
