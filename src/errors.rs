use thiserror::Error;

use crate::domain::errors::DomainError;

/// Failure while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Not logged in")]
    MissingToken,
}

/// Umbrella error returned by application services.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Pull a human-readable message out of a backend error body.
///
/// The backend answers non-2xx in several shapes; precedence is:
/// a top-level `error` string, then the first per-field array in
/// document order (`non_field_errors` excluded), then
/// `non_field_errors[0]`, then `detail`, then `message`, then the raw
/// body text, and finally the HTTP status when the body is empty.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) {
        if let Some(msg) = map.get("error").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
        for (key, value) in &map {
            if key == "non_field_errors" {
                continue;
            }
            if let Some(first) = value.as_array().and_then(|a| a.first()).and_then(|v| v.as_str()) {
                return first.to_string();
            }
        }
        if let Some(first) = map
            .get("non_field_errors")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|v| v.as_str())
        {
            return first.to_string();
        }
        for key in ["detail", "message"] {
            if let Some(msg) = map.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_beats_non_field_errors() {
        let body = r#"{"address": ["Invalid"], "non_field_errors": ["Other"]}"#;
        assert_eq!(extract_error_message(400, body), "Invalid");
    }

    #[test]
    fn first_listed_field_error_wins() {
        // document order, not alphabetical: zip is listed first
        let body = r#"{"zip": ["Bad zip"], "address": ["Invalid"]}"#;
        assert_eq!(extract_error_message(400, body), "Bad zip");
    }

    #[test]
    fn error_string_takes_precedence() {
        let body = r#"{"error": "Order already reviewed", "detail": "other"}"#;
        assert_eq!(extract_error_message(400, body), "Order already reviewed");
    }

    #[test]
    fn non_field_errors_used_when_no_field_array() {
        let body = r#"{"non_field_errors": ["Cart is empty"]}"#;
        assert_eq!(extract_error_message(400, body), "Cart is empty");
    }

    #[test]
    fn detail_fallback() {
        let body = r#"{"detail": "Invalid token."}"#;
        assert_eq!(extract_error_message(401, body), "Invalid token.");
    }

    #[test]
    fn plain_text_body_passes_through() {
        assert_eq!(
            extract_error_message(500, "  Server exploded \n"),
            "Server exploded"
        );
    }

    #[test]
    fn empty_body_yields_status_line() {
        assert_eq!(extract_error_message(502, ""), "HTTP 502");
    }

    #[test]
    fn domain_error_converts_into_market_error() {
        let err: MarketError = DomainError::EmptyCart.into();
        assert!(matches!(err, MarketError::Domain(DomainError::EmptyCart)));
    }
}
