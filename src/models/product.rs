use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    /// Decimal string on the wire, e.g. `"150000"`.
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub condition_display: String,
    #[serde(default)]
    pub seller: Option<i64>,
    #[serde(default)]
    pub seller_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// `/products` answers either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductListResponse {
    Bare(Vec<Product>),
    Paginated { results: Vec<Product> },
}

impl ProductListResponse {
    pub fn into_vec(self) -> Vec<Product> {
        match self {
            ProductListResponse::Bare(products) => products,
            ProductListResponse::Paginated { results } => results,
        }
    }
}

/// Input for `POST /products/` (sent as multipart form data).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: i64,
    pub image_filename: String,
    pub image_bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_decodes() {
        let body = r#"[{"id": 1, "title": "Lamp", "price": "5000"}]"#;
        let parsed: ProductListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_vec().len(), 1);
    }

    #[test]
    fn paginated_envelope_decodes() {
        let body = r#"{"results": [{"id": 2, "title": "Desk", "price": "90000"}]}"#;
        let parsed: ProductListResponse = serde_json::from_str(body).unwrap();
        let products = parsed.into_vec();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Desk");
    }
}
