use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned by every StripeKit call.
///
/// The variants keep the failure classes apart: a transport failure never
/// looks like a decode failure, and a well-formed API error never looks like
/// either of them.
#[derive(Error, Debug)]
pub enum StripeError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("Stripe API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {error} (Status: {status})")]
    Api { status: u16, error: ApiErrorDetails },

    /// The body did not match the expected success or error shape.
    #[error("Failed to parse Stripe API response (Status: {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// A response arrived without a body. Every documented operation returns
    /// one, so this is a broken integration rather than a user error.
    #[error("Stripe API response is missing its body (Status: {status})")]
    MissingBody { status: u16 },

    /// Request parameters could not be form-encoded.
    #[error("Failed to encode request parameters: {0}")]
    Encode(String),

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete: {0}")]
    Config(String),
}

impl StripeError {
    /// True for connection, TLS and timeout failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, StripeError::Transport(_))
    }

    /// True when the API answered with a well-formed error body.
    pub fn is_api(&self) -> bool {
        matches!(self, StripeError::Api { .. })
    }

    /// True when a body did not match the expected schema.
    pub fn is_decode(&self) -> bool {
        matches!(self, StripeError::Decode { .. })
    }

    /// True for internal-invariant violations that no caller can recover from.
    pub fn is_internal(&self) -> bool {
        matches!(self, StripeError::MissingBody { .. })
    }

    /// The decoded API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiErrorDetails> {
        match self {
            StripeError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of the response that caused the error, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StripeError::Api { status, .. }
            | StripeError::Decode { status, .. }
            | StripeError::MissingBody { status } => Some(*status),
            StripeError::Transport(e) => e.status().map(|s| s.as_u16()),
            StripeError::Encode(_) | StripeError::InvalidHeader(_) | StripeError::Config(_) => {
                None
            }
        }
    }
}

/// Category of an API error, parsed from the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    ApiConnection,
    Api,
    Authentication,
    Card,
    Idempotency,
    InvalidRequest,
    RateLimit,
    Unknown,
}

/// The `error` object of a non-success response.
///
/// `error_type` stays a string so categories added on the server side are
/// preserved verbatim; [`ApiErrorDetails::kind`] maps it to [`ApiErrorKind`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiErrorDetails {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub decline_code: Option<String>,
    #[serde(default)]
    pub charge: Option<String>,
    #[serde(default)]
    pub doc_url: Option<String>,
}

impl ApiErrorDetails {
    pub fn kind(&self) -> ApiErrorKind {
        match self.error_type.as_str() {
            "api_connection_error" => ApiErrorKind::ApiConnection,
            "api_error" => ApiErrorKind::Api,
            "authentication_error" => ApiErrorKind::Authentication,
            "card_error" => ApiErrorKind::Card,
            "idempotency_error" => ApiErrorKind::Idempotency,
            "invalid_request_error" => ApiErrorKind::InvalidRequest,
            "rate_limit_error" => ApiErrorKind::RateLimit,
            _ => ApiErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.error_type, message)?,
            None => write!(f, "{}", self.error_type)?,
        }
        if let Some(param) = &self.param {
            write!(f, " (param: {})", param)?;
        }
        Ok(())
    }
}

/// Wire envelope around [`ApiErrorDetails`].
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(error_type: &str) -> ApiErrorDetails {
        ApiErrorDetails {
            error_type: error_type.to_string(),
            message: Some("No such invoiceitem: ii_missing".to_string()),
            param: Some("id".to_string()),
            code: Some("resource_missing".to_string()),
            decline_code: None,
            charge: None,
            doc_url: None,
        }
    }

    #[test]
    fn kind_maps_known_categories() {
        assert_eq!(details("card_error").kind(), ApiErrorKind::Card);
        assert_eq!(
            details("invalid_request_error").kind(),
            ApiErrorKind::InvalidRequest
        );
        assert_eq!(details("rate_limit_error").kind(), ApiErrorKind::RateLimit);
        assert_eq!(details("brand_new_error").kind(), ApiErrorKind::Unknown);
    }

    #[test]
    fn api_error_display_includes_message_param_and_status() {
        let err = StripeError::Api {
            status: 404,
            error: details("invalid_request_error"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("No such invoiceitem: ii_missing"));
        assert!(rendered.contains("(param: id)"));
        assert!(rendered.contains("404"));
    }

    #[test]
    fn classification_helpers_are_exclusive() {
        let missing = StripeError::MissingBody { status: 200 };
        assert!(missing.is_internal());
        assert!(!missing.is_api() && !missing.is_decode() && !missing.is_transport());
        assert_eq!(missing.status_code(), Some(200));

        let decode = StripeError::Decode {
            status: 200,
            source: serde_json::from_str::<u32>("nope").unwrap_err(),
        };
        assert!(decode.is_decode());
        assert!(!decode.is_internal());

        let api = StripeError::Api {
            status: 402,
            error: details("card_error"),
        };
        assert!(api.is_api());
        assert_eq!(api.api_error().map(|e| e.kind()), Some(ApiErrorKind::Card));
        assert_eq!(api.status_code(), Some(402));

        assert_eq!(StripeError::Config("no key".into()).status_code(), None);
    }

    #[test]
    fn envelope_decodes_minimal_error_body() {
        let envelope: ApiErrorEnvelope =
            serde_json::from_str(r#"{"error":{"type":"api_error"}}"#).unwrap();
        assert_eq!(envelope.error.kind(), ApiErrorKind::Api);
        assert!(envelope.error.message.is_none());
        assert_eq!(envelope.error.to_string(), "api_error");
    }
}
