use serde::{Deserialize, Serialize};

/// Profile payload from `/api/me/` and `/api/users/{id}/`.
///
/// Public-profile responses omit the private fields, and `phone` is not
/// served by every backend revision, so most fields tolerate absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub num_reviews: Option<i64>,
}

/// Body of `PATCH /api/me/`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactUpdate {
    pub phone: String,
    pub address: String,
}
