//! 订单履约流程：查订单 → 两步发货
//!
//! 批处理流水线和 `/api/process-order` 共用

use crate::clients::ShipstationClient;
use crate::error::ApiError;
use crate::models::order::FulfillmentReport;
use crate::workflow::shipment_saga::ShipmentSaga;
use tracing::{info, warn};

/// 履约结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentOutcome {
    /// 没有待发货的订单
    OrderNotFound,
    /// 已执行发货流程（是否全部成功见报告）
    Shipped(FulfillmentReport),
}

pub struct FulfillmentFlow {
    client: ShipstationClient,
}

impl FulfillmentFlow {
    pub fn new(client: ShipstationClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ShipstationClient {
        &self.client
    }

    /// 查找订单并标记发货
    ///
    /// 查询失败返回 `Err`；发货步骤的失败记录在报告里
    pub async fn fulfill(
        &self,
        order_number: &str,
        tracking_number: &str,
    ) -> Result<FulfillmentOutcome, ApiError> {
        let Some(order_id) = self.client.fetch_order(order_number).await? else {
            warn!("订单 {} 未找到待发货记录", order_number);
            return Ok(FulfillmentOutcome::OrderNotFound);
        };

        info!("订单 {} → ShipStation ID {}", order_number, order_id);

        let report = ShipmentSaga::new(&self.client)
            .run(&order_id, tracking_number)
            .await;

        Ok(FulfillmentOutcome::Shipped(report))
    }
}
