//! API Response envelope
//!
//! Every backend endpoint wraps its payload in this structure:
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "message": "Branch created"
//! }
//! ```
//! Presence of `data` is the only success signal a consumer may rely on
//! for single-entity responses; `success` alone is not enough.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the request handled
    pub success: bool,
    /// Response payload (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error description when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Extra error context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            details: None,
        }
    }

    /// Create a successful response with a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            details: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            details: None,
        }
    }

    /// Add detail context to an error response
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The backend-provided failure text, preferring `error` over `message`
    pub fn failure_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_without_data_deserializes() {
        let envelope: ApiResponse<i64> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_error_envelope_prefers_error_over_message() {
        let envelope: ApiResponse<i64> =
            serde_json::from_str(r#"{"success":false,"message":"oops","error":"db down"}"#)
                .unwrap();
        assert_eq!(envelope.failure_text(), Some("db down"));
    }

    #[test]
    fn test_ok_skips_absent_fields() {
        let json = serde_json::to_string(&ApiResponse::ok(1)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":1}"#);
    }
}
