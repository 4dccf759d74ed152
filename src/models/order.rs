use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product: i64,
    pub product_title: String,
    #[serde(default)]
    pub product_image: Option<String>,
    /// Unit price as a decimal string.
    pub price: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub buyer: i64,
    pub buyer_name: String,
    pub seller: i64,
    pub seller_name: String,
    /// Raw status code as returned by the server (`PE`, `DE`, `CM`, `CA`).
    pub status: String,
    #[serde(default)]
    pub shipping_address: String,
    pub total_price: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
}

/// Body of `POST /orders`: create an order from the cart contents.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub address: String,
}

/// Reply from the transition endpoints (`accept`, `decline`, `cancel`)
/// and from order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}
