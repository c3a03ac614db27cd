// Shared plumbing for the StripeKit crates: tracing setup and the pooled
// reqwest client used by the dispatcher.

pub mod http; // HTTP client construction
pub mod logging; // Logging utilities

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT, DEFAULT_TIMEOUT_SECS};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};
