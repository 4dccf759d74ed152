use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::TokenProvider;
use crate::errors::{extract_error_message, ApiError};

/// Thin wrapper over `reqwest::Client`: base URL joining, auth header
/// injection and backend error-body mapping. Exactly one attempt per
/// call; nothing is retried.
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: Arc<dyn TokenProvider>,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        auth: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, request).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, request).await
    }

    /// Bodyless POST, used by the order transition endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::POST, path, self.request(Method::POST, path))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).multipart(form);
        self.execute(Method::POST, path, request).await
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header("Accept", "application/json");
        if let Some(token) = self.auth.token() {
            request = request.header("Authorization", format!("Token {token}"));
        }
        request
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        log::debug!("{method} {path} -> {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(status.as_u16(), &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Content type for an upload, guessed from the filename. The backend
/// only serves images, so unknown extensions default to JPEG.
pub fn image_mime(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
