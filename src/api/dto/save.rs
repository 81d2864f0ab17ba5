//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};

use crate::error::StatusBody;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub url: String,

    /// Optional client-chosen alias. Absent, null or blank means the server
    /// generates one.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful save response: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub status: StatusBody,
    pub alias: String,
}

impl SaveResponse {
    pub fn new(alias: String) -> Self {
        Self {
            status: StatusBody::ok(),
            alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_optional() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();

        assert_eq!(req.url, "https://example.com");
        assert!(req.alias.is_none());
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(SaveResponse::new("abc123".to_string())).unwrap();

        assert_eq!(body, serde_json::json!({"status": "OK", "alias": "abc123"}));
    }
}
