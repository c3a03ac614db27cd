//! The network seam.
//!
//! [`HttpTransport`] executes one [`ApiRequest`] and hands back the raw status
//! and body; it knows nothing about Stripe's success or error shapes. The
//! production implementation wraps a pooled `reqwest::Client`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use reqwest::Client;
use stripekit_common::log_error;
use tracing::debug;

use crate::error::StripeError;
use crate::request::ApiRequest;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Status and body of a response, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the response carried no body bytes at all.
    pub body: Option<Vec<u8>>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self {
            status,
            body: if body.is_empty() { None } else { Some(body) },
        }
    }

    pub fn without_body(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Executes exactly one HTTP round trip per call.
///
/// Implementations must be safe to share between concurrent calls and must
/// report connection-level failures as [`StripeError::Transport`].
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: ApiRequest) -> BoxFuture<'_, RawResponse, StripeError>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> BoxFuture<'_, RawResponse, StripeError> {
        Box::pin(async move {
            let ApiRequest {
                method,
                url,
                headers,
                body,
            } = request;

            let mut builder = self.client.request(method, &url).headers(headers);
            if !body.is_empty() {
                builder = builder.body(body);
            }

            let response = builder.send().await.inspect_err(|e| {
                log_error(e, &format!("[StripeKit] Request to {} failed", url));
            })?;
            let status = response.status().as_u16();
            let bytes = response.bytes().await.inspect_err(|e| {
                log_error(e, &format!("[StripeKit] Reading the response of {} failed", url));
            })?;

            debug!("[StripeKit] {} answered with status {} ({} bytes)", url, status, bytes.len());

            Ok(RawResponse::new(status, bytes.to_vec()))
        })
    }
}
