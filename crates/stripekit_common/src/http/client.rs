use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Idle connections kept per host in the pool
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// A static HTTP client that can be reused across the application.
///
/// Configured with the default timeouts. Clients that cannot be built from
/// configuration fall back to this one, so the whole process shares a single
/// connection pool unless a caller asks for something else.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS, false)
        .unwrap_or_else(|_| Client::new())
});

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The overall timeout in seconds for a request
/// * `connect_timeout_secs` - The timeout in seconds for establishing a connection
/// * `follow_redirects` - Whether the client should follow redirects
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(
    timeout_secs: u64,
    connect_timeout_secs: u64,
    follow_redirects: bool,
) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}
