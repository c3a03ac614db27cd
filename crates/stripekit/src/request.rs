//! Request building and the header policy.
//!
//! Every request carries the same base headers (version pin, bearer
//! credential, form content type). Caller headers are laid on top: a
//! same-named caller header replaces the base value, every other base header
//! is kept.

use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use uuid::Uuid;

use crate::error::StripeError;

/// Content type of every encoded request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Pins the dated API contract.
pub const STRIPE_VERSION: HeaderName = HeaderName::from_static("stripe-version");

/// Makes a mutating request safe to repeat.
pub const IDEMPOTENCY_KEY: HeaderName = HeaderName::from_static("idempotency-key");

/// Acts on behalf of a connected account.
pub const STRIPE_ACCOUNT: HeaderName = HeaderName::from_static("stripe-account");

/// A fully built request, ready for a transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

/// Builds the headers sent with every request.
///
/// The authorization value is marked sensitive so it is hidden from `Debug`
/// output of the header map.
pub fn base_headers(secret_key: &str, api_version: &str) -> Result<HeaderMap, StripeError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", secret_key))
        .map_err(|_| StripeError::Config("secret key contains invalid characters".to_string()))?;
    auth.set_sensitive(true);

    let version = HeaderValue::from_str(api_version)
        .map_err(|e| StripeError::Config(format!("invalid API version {:?}: {}", api_version, e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(STRIPE_VERSION, version);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    Ok(headers)
}

/// Lays `overrides` on top of `base`.
///
/// Every value of a header named in `overrides` replaces all base values of
/// that name; headers only present in `base` are left untouched.
pub fn merge_headers(base: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = base.clone();
    for name in overrides.keys() {
        merged.remove(name);
        for value in overrides.get_all(name) {
            merged.append(name.clone(), value.clone());
        }
    }
    merged
}

/// Parses `name` and `value` and inserts them, replacing earlier values.
pub(crate) fn insert_header(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
) -> Result<(), StripeError> {
    let name = HeaderName::try_from(name)
        .map_err(|e| StripeError::InvalidHeader(format!("invalid header name {:?}: {}", name, e)))?;
    let value = HeaderValue::try_from(value)
        .map_err(|e| StripeError::InvalidHeader(format!("invalid value for {}: {}", name, e)))?;
    headers.insert(name, value);
    Ok(())
}

/// Joins the API base, the path and the query string into the request target.
///
/// Paths that are already absolute URLs are used as they are. The `?` is only
/// added when there is a query.
pub fn request_url(api_base: &str, path: &str, query: &str) -> String {
    let mut url = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", api_base.trim_end_matches('/'), path)
    };
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Per-call header overrides.
///
/// ```
/// use stripekit::RequestOptions;
///
/// let options = RequestOptions::new()
///     .idempotency_key("order-42-capture")?
///     .stripe_account("acct_123")?;
/// assert_eq!(options.headers().len(), 2);
/// # Ok::<(), stripekit::StripeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying a freshly generated idempotency key.
    pub fn idempotent() -> Self {
        let mut headers = HeaderMap::new();
        // A hyphenated UUID is always a valid header value.
        if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            headers.insert(IDEMPOTENCY_KEY, value);
        }
        Self { headers }
    }

    pub fn idempotency_key(self, key: &str) -> Result<Self, StripeError> {
        self.header(IDEMPOTENCY_KEY.as_str(), key)
    }

    pub fn stripe_account(self, account: &str) -> Result<Self, StripeError> {
        self.header(STRIPE_ACCOUNT.as_str(), account)
    }

    /// Pins a different API version for this call only.
    pub fn stripe_version(self, version: &str) -> Result<Self, StripeError> {
        self.header(STRIPE_VERSION.as_str(), version)
    }

    /// Sets an arbitrary header, replacing an earlier value of the same name.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, StripeError> {
        insert_header(&mut self.headers, name, value)?;
        Ok(self)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> HeaderMap {
        base_headers("sk_test_123", "2019-05-16").unwrap()
    }

    #[test]
    fn base_headers_carry_version_auth_and_content_type() {
        let headers = base();
        assert_eq!(headers[&STRIPE_VERSION], "2019-05-16");
        assert_eq!(headers[AUTHORIZATION], "Bearer sk_test_123");
        assert_eq!(headers[CONTENT_TYPE], FORM_CONTENT_TYPE);
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn base_headers_reject_unsendable_secret() {
        let err = base_headers("sk_test\n123", "2019-05-16").unwrap_err();
        assert!(matches!(err, StripeError::Config(_)));
    }

    #[test]
    fn caller_content_type_overrides_only_that_header() {
        let mut overrides = HeaderMap::new();
        overrides.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let merged = merge_headers(&base(), &overrides);
        assert_eq!(merged[CONTENT_TYPE], "application/json");
        assert_eq!(merged[AUTHORIZATION], "Bearer sk_test_123");
        assert_eq!(merged[&STRIPE_VERSION], "2019-05-16");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn caller_headers_are_added_next_to_base_headers() {
        let options = RequestOptions::new().stripe_account("acct_1").unwrap();
        let merged = merge_headers(&base(), options.headers());
        assert_eq!(merged[&STRIPE_ACCOUNT], "acct_1");
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn request_url_skips_question_mark_for_empty_query() {
        assert_eq!(
            request_url("https://api.stripe.com/", "/v1/invoiceitems", ""),
            "https://api.stripe.com/v1/invoiceitems"
        );
        assert_eq!(
            request_url("https://api.stripe.com", "/v1/invoiceitems", "limit=3"),
            "https://api.stripe.com/v1/invoiceitems?limit=3"
        );
    }

    #[test]
    fn request_url_keeps_absolute_paths() {
        assert_eq!(
            request_url("http://localhost", "https://files.stripe.com/v1/files", ""),
            "https://files.stripe.com/v1/files"
        );
    }

    #[test]
    fn idempotent_options_generate_unique_keys() {
        let a = RequestOptions::idempotent();
        let b = RequestOptions::idempotent();
        assert!(a.headers().contains_key(&IDEMPOTENCY_KEY));
        assert_ne!(a.headers()[&IDEMPOTENCY_KEY], b.headers()[&IDEMPOTENCY_KEY]);
    }

    #[test]
    fn invalid_header_name_is_reported() {
        let err = RequestOptions::new().header("bad header", "x").unwrap_err();
        assert!(matches!(err, StripeError::InvalidHeader(_)));
    }
}
