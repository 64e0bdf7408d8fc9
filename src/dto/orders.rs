use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderItem;

/// Body posted to `POST /api/orders` when a shop submits a composed order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderPayload {
    pub shop_id: i64,
    pub items: Vec<OrderItem>,
    pub notes: String,
    pub total: f64,
    pub status: String,
    pub payment: String,
    pub date: String,
}
