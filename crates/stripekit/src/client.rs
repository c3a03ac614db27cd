//! The dispatcher: one configured client shared by every route group.

use std::fmt;
use std::sync::Arc;

use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use stripekit_common::{create_client, log_result, HTTP_CLIENT};
use stripekit_config::StripeConfig;

use crate::error::StripeError;
use crate::params::Params;
use crate::request::{base_headers, merge_headers, request_url, ApiRequest};
use crate::resolve::resolve;
use crate::routes::{
    DiscountRoutes, EphemeralKeyRoutes, InvoiceItemRoutes, InvoiceRoutes, PaymentIntentRoutes,
    SourceRoutes,
};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Async client for the Stripe API.
///
/// Cloning is cheap: clones share the credential, the base headers and the
/// connection pool. None of them change after construction, so the client can
/// be used from any number of tasks at once.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api_base: String,
    base_headers: HeaderMap,
    transport: Arc<dyn HttpTransport>,
}

impl StripeClient {
    /// Client for the live API with default settings, on the shared HTTP pool.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, StripeError> {
        let config = StripeConfig::with_secret_key(secret_key);
        let transport = Arc::new(ReqwestTransport::new(HTTP_CLIENT.clone()));
        Self::with_transport(&config, transport)
    }

    /// Client built from loaded configuration, with its own HTTP pool using
    /// the configured timeouts.
    pub fn from_config(config: &StripeConfig) -> Result<Self, StripeError> {
        let http = create_client(config.timeout_secs, config.connect_timeout_secs, false)?;
        Self::with_transport(config, Arc::new(ReqwestTransport::new(http)))
    }

    /// Loads configuration from files and the environment, then builds a client.
    pub fn from_env() -> Result<Self, StripeError> {
        let config = log_result(
            stripekit_config::load_config(),
            "[StripeKit] Configuration loaded",
            "[StripeKit] Failed to load configuration",
        )
        .map_err(|e| StripeError::Config(format!("Failed to load configuration: {}", e)))?;
        Self::from_config(&config)
    }

    /// Client that sends every request through `transport`.
    pub fn with_transport(
        config: &StripeConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, StripeError> {
        let secret_key = config
            .secret_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| StripeError::Config("secret key is not set".to_string()))?;

        let base_headers = base_headers(secret_key, &config.api_version)?;
        info!(
            "[StripeKit] Client ready for {} (API version {})",
            config.api_base, config.api_version
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                api_base: config.api_base.clone(),
                base_headers,
                transport,
            }),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.inner.api_base
    }

    /// Performs exactly one round trip and resolves the response into `T`.
    ///
    /// `query` and `body` must already be encoded. `headers` are laid over
    /// the base headers; see [`merge_headers`].
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: String,
        headers: &HeaderMap,
    ) -> Result<T, StripeError> {
        let request = ApiRequest {
            url: request_url(&self.inner.api_base, path, query),
            headers: merge_headers(&self.inner.base_headers, headers),
            method,
            body,
        };
        debug!("[StripeKit] Sending {} {}", request.method, path);

        let response = self.inner.transport.execute(request).await?;
        resolve(&response)
    }

    /// Encodes `params` and sends them: in the query string for GET and
    /// DELETE, in the form body for everything else.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        headers: &HeaderMap,
    ) -> Result<T, StripeError> {
        let encoded = params.encode()?;
        if method == Method::GET || method == Method::DELETE {
            self.send(method, path, &encoded, String::new(), headers).await
        } else {
            self.send(method, path, "", encoded, headers).await
        }
    }

    pub fn invoice_items(&self) -> InvoiceItemRoutes {
        InvoiceItemRoutes::new(self.clone())
    }

    pub fn invoices(&self) -> InvoiceRoutes {
        InvoiceRoutes::new(self.clone())
    }

    pub fn payment_intents(&self) -> PaymentIntentRoutes {
        PaymentIntentRoutes::new(self.clone())
    }

    pub fn sources(&self) -> SourceRoutes {
        SourceRoutes::new(self.clone())
    }

    pub fn discounts(&self) -> DiscountRoutes {
        DiscountRoutes::new(self.clone())
    }

    pub fn ephemeral_keys(&self) -> EphemeralKeyRoutes {
        EphemeralKeyRoutes::new(self.clone())
    }
}

// Base headers hold the credential; only the target is shown.
impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.inner.api_base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{BoxFuture, RawResponse};
    use std::sync::Mutex;

    /// Records the request and answers with a fixed response.
    struct Recorder {
        seen: Mutex<Vec<ApiRequest>>,
        response: RawResponse,
    }

    impl Recorder {
        fn answering(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                response: RawResponse::new(status, body),
            })
        }

        fn last(&self) -> ApiRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl HttpTransport for Recorder {
        fn execute(&self, request: ApiRequest) -> BoxFuture<'_, RawResponse, StripeError> {
            self.seen.lock().unwrap().push(request);
            let response = self.response.clone();
            Box::pin(async move { Ok(response) })
        }
    }

    fn config() -> StripeConfig {
        StripeConfig {
            api_base: "http://stripe.test".to_string(),
            ..StripeConfig::with_secret_key("sk_test_123")
        }
    }

    fn assert_shareable<T: Send + Sync + Clone>() {}

    #[test]
    fn client_and_route_groups_are_shareable() {
        assert_shareable::<StripeClient>();
        assert_shareable::<InvoiceItemRoutes>();
        assert_shareable::<InvoiceRoutes>();
        assert_shareable::<PaymentIntentRoutes>();
        assert_shareable::<SourceRoutes>();
        assert_shareable::<DiscountRoutes>();
        assert_shareable::<EphemeralKeyRoutes>();
    }

    #[test]
    fn missing_secret_key_is_config_error() {
        let err = StripeClient::with_transport(&StripeConfig::default(), Recorder::answering(200, "{}"))
            .unwrap_err();
        assert!(matches!(err, StripeError::Config(_)));

        let empty = StripeConfig::with_secret_key("");
        assert!(StripeClient::from_config(&empty).is_err());
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let client = StripeClient::with_transport(&config(), Recorder::answering(200, "{}")).unwrap();
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("stripe.test"));
        assert!(!rendered.contains("sk_test_123"));
    }

    #[tokio::test]
    async fn get_params_go_into_the_query() {
        let recorder = Recorder::answering(200, r#"{"id":"x","deleted":true}"#);
        let client = StripeClient::with_transport(&config(), recorder.clone()).unwrap();

        let params = Params::new().with("limit", 3);
        let _: crate::models::DeletedObject = client
            .request(Method::GET, "/v1/invoiceitems", &params, &HeaderMap::new())
            .await
            .unwrap();

        let sent = recorder.last();
        assert_eq!(sent.url, "http://stripe.test/v1/invoiceitems?limit=3");
        assert!(sent.body.is_empty());
    }

    #[tokio::test]
    async fn post_params_go_into_the_body() {
        let recorder = Recorder::answering(200, r#"{"id":"x","deleted":true}"#);
        let client = StripeClient::with_transport(&config(), recorder.clone()).unwrap();

        let params = Params::new().with("amount", 1000).with("currency", "usd");
        let _: crate::models::DeletedObject = client
            .request(Method::POST, "/v1/invoiceitems", &params, &HeaderMap::new())
            .await
            .unwrap();

        let sent = recorder.last();
        assert_eq!(sent.url, "http://stripe.test/v1/invoiceitems");
        assert_eq!(sent.body, "amount=1000&currency=usd");
        assert_eq!(sent.headers[http::header::AUTHORIZATION], "Bearer sk_test_123");
    }
}
