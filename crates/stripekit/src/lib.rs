//! Typed async client for the Stripe REST API.
//!
//! ```no_run
//! use stripekit::{StripeClient, routes::InvoiceItemCreateParams};
//!
//! # async fn run() -> Result<(), stripekit::StripeError> {
//! let client = StripeClient::new("sk_test_...")?;
//! let item = client
//!     .invoice_items()
//!     .create(&InvoiceItemCreateParams {
//!         customer: "cus_123".to_string(),
//!         amount: Some(1000),
//!         currency: "usd".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created {:?}", item.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod params;
pub mod request;
pub mod resolve;
pub mod routes;
pub mod transport;

pub use client::StripeClient; // The dispatcher
pub use endpoint::Endpoint;
pub use error::{ApiErrorDetails, ApiErrorKind, StripeError};
pub use params::{Param, Params};
pub use request::{ApiRequest, RequestOptions};
pub use routes::ListParams;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};

// Configuration and logging live in the sibling crates
pub use stripekit_common::logging;
pub use stripekit_config::{load_config, StripeConfig};
