use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: i64,
    pub title: String,
    /// Decimal string on the wire.
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub seller_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub product: CartProduct,
    pub quantity: i64,
}

/// `total_cart_price` is the one price the backend sends as a JSON
/// number rather than a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_cart_price: f64,
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, Serialize)]
pub struct AddCartItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Reply from `POST /cart`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}
