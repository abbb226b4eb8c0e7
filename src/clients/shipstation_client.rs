/// ShipStation 代理客户端
///
/// 封装所有与订单代理服务相关的调用逻辑；不做重试，不设超时
use crate::config::Config;
use crate::error::ApiError;
use crate::models::order::{AssignUserRequest, MarkShippedRequest, OrdersResponse};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info};

const ORDERS_PATH: &str = "/orders";
const MARK_SHIPPED_PATH: &str = "/orders/markasshipped";
const ASSIGN_USER_PATH: &str = "/orders/assignuser";

/// 订单代理客户端
#[derive(Debug, Clone)]
pub struct ShipstationClient {
    http: Client,
    base_url: String,
    carrier_code: String,
    assign_user_id: String,
}

impl ShipstationClient {
    /// 创建新的代理客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.proxy_base_url.trim_end_matches('/').to_string(),
            carrier_code: config.carrier_code.clone(),
            assign_user_id: config.assign_user_id.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 按订单号查询订单
    ///
    /// # 返回
    /// 第一个 `awaiting_shipment` 订单的 ID；没有时返回 `None`
    pub async fn fetch_order(&self, order_number: &str) -> Result<Option<String>, ApiError> {
        debug!("查询订单: {}", order_number);

        let response = self
            .http
            .get(self.url(ORDERS_PATH))
            .query(&[("orderNumber", order_number)])
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: ORDERS_PATH.to_string(),
                source,
            })?;

        let response = ensure_success(response, ORDERS_PATH)?;

        let data: OrdersResponse =
            response
                .json()
                .await
                .map_err(|source| ApiError::JsonParseFailed {
                    endpoint: ORDERS_PATH.to_string(),
                    source,
                })?;

        debug!("订单 {} 共返回 {} 条记录", order_number, data.orders.len());

        Ok(data.first_awaiting_shipment())
    }

    /// 标记订单已发货
    ///
    /// 同时通知客户和销售渠道。该操作不是幂等的：重复调用会向上游重复发送发货通知。
    pub async fn mark_as_shipped(
        &self,
        order_id: &str,
        tracking_number: &str,
    ) -> Result<(), ApiError> {
        let body = MarkShippedRequest {
            order_id,
            carrier_code: &self.carrier_code,
            tracking_number,
            notify_customer: true,
            notify_sales_channel: true,
        };

        debug!("标记发货 Payload: {:?}", body);

        self.post_json(MARK_SHIPPED_PATH, &body).await?;

        info!("✓ 订单 {} 已标记发货 (运单号: {})", order_id, tracking_number);
        Ok(())
    }

    /// 将订单分配给内部用户
    pub async fn assign_user_to_order(&self, order_id: &str) -> Result<(), ApiError> {
        let body = AssignUserRequest {
            order_ids: vec![order_id],
            user_id: &self.assign_user_id,
        };

        let response = self.post_json(ASSIGN_USER_PATH, &body).await?;

        // 响应内容只用于日志，解析失败不影响结果
        let data: Value = response.json().await.unwrap_or(Value::Null);
        debug!("分配用户结果: {}", data);

        info!("✓ 订单 {} 已分配用户", order_id);
        Ok(())
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: path.to_string(),
                source,
            })?;

        ensure_success(response, path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// 非 2xx 一律视为传输错误
fn ensure_success(response: Response, path: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::BadStatus {
            endpoint: path.to_string(),
            status: status.as_u16(),
        })
    }
}
