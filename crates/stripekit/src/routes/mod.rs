//! Route groups, one per resource.
//!
//! A group is a thin table of operations: each one picks a method and an
//! [`Endpoint`](crate::endpoint::Endpoint), turns its typed parameters into a
//! [`Params`] tree and hands everything to [`StripeClient::request`](crate::StripeClient::request). Headers
//! set on a group are sent with every call made through it.

use http::{HeaderMap, HeaderName};
use serde::Serialize;
use tracing::warn;

use crate::params::{Param, Params};
use crate::request::RequestOptions;

// Shared constructor and header plumbing of the route groups.
macro_rules! route_group {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: crate::client::StripeClient,
            headers: http::HeaderMap,
        }

        impl $name {
            pub(crate) fn new(client: crate::client::StripeClient) -> Self {
                Self {
                    client,
                    headers: http::HeaderMap::new(),
                }
            }

            /// Sends `name: value` with every call of this group.
            pub fn with_header(
                mut self,
                name: &str,
                value: &str,
            ) -> Result<Self, crate::error::StripeError> {
                crate::request::insert_header(&mut self.headers, name, value)?;
                Ok(self)
            }

            /// Adds the headers of `options` to every call of this group.
            pub fn with_options(mut self, options: crate::request::RequestOptions) -> Self {
                crate::routes::apply_options(&mut self.headers, options);
                self
            }

            pub fn headers_mut(&mut self) -> &mut http::HeaderMap {
                &mut self.headers
            }
        }
    };
}

pub(crate) use route_group;

pub mod discounts;
pub mod ephemeral_keys;
pub mod invoice_items;
pub mod invoices;
pub mod payment_intents;
pub mod sources;

pub use discounts::DiscountRoutes;
pub use ephemeral_keys::{EphemeralKeyParams, EphemeralKeyRoutes};
pub use invoice_items::{
    InvoiceItemCreateParams, InvoiceItemListParams, InvoiceItemRoutes, InvoiceItemUpdateParams,
    PeriodParams,
};
pub use invoices::{
    InvoiceCreateParams, InvoiceListParams, InvoicePayParams, InvoiceRoutes,
    InvoiceUpdateParams, UpcomingInvoiceParams,
};
pub use payment_intents::{
    PaymentIntentCancelParams, PaymentIntentCaptureParams, PaymentIntentConfirmParams,
    PaymentIntentCreateParams, PaymentIntentListParams, PaymentIntentRoutes,
    PaymentIntentUpdateParams,
};
pub use sources::{SourceCreateParams, SourceOwnerParams, SourceRoutes, SourceUpdateParams};

/// Cursor and page size shared by every list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Between 1 and 100; the API defaults to 10.
    pub limit: Option<u32>,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
    /// Any further documented filter keys.
    pub extra: Params,
}

impl ListParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("limit", self.limit)
            .with("starting_after", self.starting_after.clone())
            .with("ending_before", self.ending_before.clone());
        params.merge(&self.extra);
        params
    }
}

/// Wire name of a serde enum, e.g. `CaptureMethod::Manual` to `"manual"`.
///
/// The `Unknown` catch-all variant has no wire name and is left out.
pub(crate) fn wire_name<T: Serialize>(value: Option<T>) -> Param {
    match value.map(serde_json::to_value) {
        Some(Ok(serde_json::Value::String(name))) if name == UNKNOWN_VARIANT => {
            warn!("[StripeKit] Dropping enum parameter without a wire name");
            Param::Absent
        }
        Some(Ok(serde_json::Value::String(name))) => Param::Str(name),
        _ => Param::Absent,
    }
}

// Serialized form of the `#[serde(other)] Unknown` variants.
const UNKNOWN_VARIANT: &str = "unknown";

pub(crate) fn apply_options(headers: &mut HeaderMap, options: RequestOptions) {
    let mut current: Option<HeaderName> = None;
    for (name, value) in options.into_headers() {
        match name {
            Some(name) => {
                headers.insert(name.clone(), value);
                current = Some(name);
            }
            // Further values of a multi-valued header.
            None => {
                if let Some(name) = &current {
                    headers.append(name.clone(), value);
                }
            }
        }
    }
}
