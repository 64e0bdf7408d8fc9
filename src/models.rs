use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role claim carried by a session token. Anything outside the known set
/// decodes as `Unknown` and lands on the generic dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Role {
    Admin,
    Driver,
    Shop,
    #[default]
    Unknown,
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ADMIN" => Role::Admin,
            "DRIVER" => Role::Driver,
            "SHOP" => Role::Shop,
            _ => Role::Unknown,
        }
    }
}

impl Role {
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Admin => "/dashboard/admin",
            Role::Driver => "/dashboard/driver",
            Role::Shop => "/dashboard/shop",
            Role::Unknown => "/dashboard",
        }
    }
}

/// Order lifecycle states the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Status strings coming from the backend vary in case; compare ignoring it.
    pub fn matches(self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Paid,
    Unpaid,
}

impl PaymentState {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentState::Paid => "paid",
            PaymentState::Unpaid => "unpaid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Human-readable order code, e.g. "A100".
    pub order_id: String,
    pub date: String,
    pub total: f64,
    pub status: String,
    pub payment: String,
    pub shop_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at the time the order was composed.
    pub price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub unit: String,
    pub category: String,
    pub description: String,
    pub in_stock: bool,
    pub supplier: String,
}
