//! 代理 API 的请求/响应结构，以及发货步骤记录

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 待发货状态
pub const AWAITING_SHIPMENT: &str = "awaiting_shipment";

/// `GET /orders` 的响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
}

/// 订单列表中的一项，只关心 ID 和状态
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// ShipStation 返回的是数字，代理也可能转成字符串
    #[serde(default)]
    pub order_id: JsonValue,
    /// 非字符串的状态视为不匹配，不影响整个列表的解析
    #[serde(default)]
    pub order_status: JsonValue,
}

impl OrderSummary {
    /// 订单 ID 统一转成字符串
    pub fn order_id(&self) -> Option<String> {
        match &self.order_id {
            JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_awaiting_shipment(&self) -> bool {
        self.order_status.as_str() == Some(AWAITING_SHIPMENT)
    }
}

impl OrdersResponse {
    /// 第一个待发货订单的 ID
    pub fn first_awaiting_shipment(&self) -> Option<String> {
        self.orders
            .iter()
            .find(|order| order.is_awaiting_shipment())
            .and_then(OrderSummary::order_id)
    }
}

/// `POST /orders/markasshipped` 请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkShippedRequest<'a> {
    pub order_id: &'a str,
    pub carrier_code: &'a str,
    pub tracking_number: &'a str,
    pub notify_customer: bool,
    pub notify_sales_channel: bool,
}

/// `POST /orders/assignuser` 请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserRequest<'a> {
    pub order_ids: Vec<&'a str>,
    pub user_id: &'a str,
}

/// 发货流程中单个步骤的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
    /// 前一步失败，本步未执行
    Skipped,
}

impl StepOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StepOutcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// 两步发货（标记发货 → 分配用户）的执行记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentReport {
    pub order_id: String,
    pub mark_shipped: StepOutcome,
    pub assign_user: StepOutcome,
}

impl FulfillmentReport {
    /// 两步都成功
    pub fn is_complete(&self) -> bool {
        self.mark_shipped.is_succeeded() && self.assign_user.is_succeeded()
    }

    /// 上游已记为发货，但用户分配失败；不做回滚
    pub fn is_partially_applied(&self) -> bool {
        self.mark_shipped.is_succeeded() && !self.assign_user.is_succeeded()
    }

    /// 第一个失败步骤的错误信息
    pub fn first_error(&self) -> Option<&str> {
        self.mark_shipped.error().or_else(|| self.assign_user.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: JsonValue) -> OrdersResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_and_missing_order_list() {
        assert_eq!(parse(json!({ "orders": [] })).first_awaiting_shipment(), None);
        assert_eq!(parse(json!({})).first_awaiting_shipment(), None);
    }

    #[test]
    fn test_skips_orders_not_awaiting_shipment() {
        let response = parse(json!({
            "orders": [
                { "orderId": 1, "orderStatus": "shipped" },
                { "orderId": 2, "orderStatus": "cancelled" }
            ]
        }));
        assert_eq!(response.first_awaiting_shipment(), None);
    }

    #[test]
    fn test_first_awaiting_shipment_wins() {
        let response = parse(json!({
            "orders": [
                { "orderId": 10, "orderStatus": "shipped" },
                { "orderId": 11, "orderStatus": "awaiting_shipment" },
                { "orderId": "12", "orderStatus": "awaiting_shipment" }
            ]
        }));
        assert_eq!(response.first_awaiting_shipment().as_deref(), Some("11"));
    }

    #[test]
    fn test_non_string_status_is_skipped() {
        let response = parse(json!({
            "orders": [
                { "orderId": 1, "orderStatus": null },
                { "orderId": 2, "orderStatus": 5 },
                { "orderId": 3, "orderStatus": { "code": "awaiting_shipment" } },
                { "orderId": 4, "orderStatus": ["awaiting_shipment"] },
                { "orderId": 5 },
                { "orderId": 6, "orderStatus": "awaiting_shipment" }
            ]
        }));
        assert_eq!(response.first_awaiting_shipment().as_deref(), Some("6"));
    }

    #[test]
    fn test_mark_shipped_payload_shape() {
        let body = MarkShippedRequest {
            order_id: "42",
            carrier_code: "usps",
            tracking_number: "9400111899560000000000",
            notify_customer: true,
            notify_sales_channel: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "orderId": "42",
                "carrierCode": "usps",
                "trackingNumber": "9400111899560000000000",
                "notifyCustomer": true,
                "notifySalesChannel": true
            })
        );
    }

    #[test]
    fn test_partially_applied_report() {
        let report = FulfillmentReport {
            order_id: "1".to_string(),
            mark_shipped: StepOutcome::Succeeded,
            assign_user: StepOutcome::Failed("HTTP error! Status: 502".to_string()),
        };
        assert!(!report.is_complete());
        assert!(report.is_partially_applied());
        assert_eq!(report.first_error(), Some("HTTP error! Status: 502"));
    }
}
