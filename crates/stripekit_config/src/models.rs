use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the live API.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// The dated API contract every request is pinned to.
pub const DEFAULT_API_VERSION: &str = "2019-05-16";

/// Default overall request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// --- Stripe Config ---
// Holds the connection settings. The secret key may come from the config
// sources or directly from the STRIPE_SECRET_KEY env var.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StripeConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String, // e.g. https://api.stripe.com, overridden in tests
    #[serde(default = "default_api_version")]
    pub api_version: String, // value of the Stripe-Version header
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default, skip_serializing)]
    pub secret_key: Option<String>,
}

impl StripeConfig {
    /// Creates a config pointing at the live API with the given secret key.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Some(secret_key.into()),
            ..Self::default()
        }
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_version: default_api_version(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            secret_key: None,
        }
    }
}

// The secret key must never end up in logs.
impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secret_key() {
        let config = StripeConfig::with_secret_key("sk_test_123");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk_test_123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn secret_key_is_not_serialized() {
        let config = StripeConfig::with_secret_key("sk_test_123");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret_key"));
        assert!(json.contains("2019-05-16"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: StripeConfig = serde_json::from_str(r#"{"api_base":"http://localhost:12111"}"#).unwrap();
        assert_eq!(config.api_base, "http://localhost:12111");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.secret_key.is_none());
    }
}
