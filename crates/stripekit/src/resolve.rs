//! Turns a raw response into a typed model or a typed error.
//!
//! Wire conventions (lower snake case field names, timestamps as seconds
//! since the epoch) live on the model types as serde attributes, so every
//! decode goes through the same fixed rules.

use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::{ApiErrorEnvelope, StripeError};
use crate::transport::RawResponse;

/// Resolves `response` into `T` or a [`StripeError`].
///
/// - no body: [`StripeError::MissingBody`], nothing is decoded
/// - 2xx: body decoded as `T`
/// - anything else: body decoded as the error envelope, returned as
///   [`StripeError::Api`]
///
/// A body that fails to decode on either path is a [`StripeError::Decode`].
pub fn resolve<T: DeserializeOwned>(response: &RawResponse) -> Result<T, StripeError> {
    let status = response.status;
    let body = match response.body.as_deref() {
        Some(body) if !body.is_empty() => body,
        _ => {
            error!("[StripeKit] Response with status {} has no body", status);
            return Err(StripeError::MissingBody { status });
        }
    };

    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|source| {
            warn!(
                "[StripeKit] Success body does not match the expected model: {}",
                source
            );
            StripeError::Decode { status, source }
        });
    }

    let envelope: ApiErrorEnvelope = serde_json::from_slice(body).map_err(|source| {
        warn!(
            "[StripeKit] Error body with status {} is not a Stripe error: {}",
            status, source
        );
        StripeError::Decode { status, source }
    })?;

    warn!(
        "[StripeKit] Stripe API request failed with HTTP status: {}. Error: {}",
        status, envelope.error
    );
    Err(StripeError::Api {
        status,
        error: envelope.error,
    })
}
