//! 两步发货流程
//!
//! 标记发货 → 分配用户。第一步失败时不会执行第二步；
//! 第二步失败时上游已记为发货，不做补偿，只在报告中体现。

use crate::clients::ShipstationClient;
use crate::models::order::{FulfillmentReport, StepOutcome};
use tracing::{error, warn};

pub struct ShipmentSaga<'a> {
    client: &'a ShipstationClient,
}

impl<'a> ShipmentSaga<'a> {
    pub fn new(client: &'a ShipstationClient) -> Self {
        Self { client }
    }

    /// 执行两步发货并记录每一步的结果
    pub async fn run(&self, order_id: &str, tracking_number: &str) -> FulfillmentReport {
        let mark_shipped = match self.client.mark_as_shipped(order_id, tracking_number).await {
            Ok(()) => StepOutcome::Succeeded,
            Err(e) => {
                error!("订单 {} 标记发货失败: {}", order_id, e);
                StepOutcome::Failed(e.to_string())
            }
        };

        let assign_user = if mark_shipped.is_succeeded() {
            match self.client.assign_user_to_order(order_id).await {
                Ok(()) => StepOutcome::Succeeded,
                Err(e) => {
                    warn!(
                        "⚠️ 订单 {} 已发货但分配用户失败，需要人工处理: {}",
                        order_id, e
                    );
                    StepOutcome::Failed(e.to_string())
                }
            }
        } else {
            StepOutcome::Skipped
        };

        FulfillmentReport {
            order_id: order_id.to_string(),
            mark_shipped,
            assign_user,
        }
    }
}
