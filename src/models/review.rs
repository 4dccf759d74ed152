use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub product_info: Option<serde_json::Value>,
}

/// Aggregate from `/reviews/stats/{user_id}`. The distribution maps the
/// star value (as a JSON object key, so a string) to a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingStats {
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub distribution: BTreeMap<String, i64>,
}

/// Body of `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub order_id: i64,
    pub rating: i32,
    pub comment: String,
}

/// Reply from `POST /reviews`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub message: Option<String>,
}
