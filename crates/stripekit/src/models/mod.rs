//! Typed response models.
//!
//! Models are plain data decoded fresh from each response. Field names match
//! the wire (lower snake case) and timestamps are decoded from seconds since
//! the epoch into `DateTime<Utc>`. Enumerations carry an `Unknown` variant so
//! values added on the server side do not fail decoding.

use serde::{Deserialize, Serialize};

use crate::params::Params;

pub mod common;
pub mod discount;
pub mod ephemeral_key;
pub mod invoice;
pub mod invoice_item;
pub mod payment_intent;
pub mod source;

pub use common::{Address, Period, ShippingLabel, TaxRate};
pub use discount::{Coupon, CouponDuration, Discount};
pub use ephemeral_key::EphemeralKey;
pub use invoice::{
    Invoice, InvoiceBilling, InvoiceBillingReason, InvoiceLineItem, InvoiceStatus,
    InvoiceStatusTransitions, InvoiceThresholdReason, InvoiceTotalTaxAmount,
};
pub use invoice_item::InvoiceItem;
pub use payment_intent::{
    CancellationReason, CaptureMethod, ConfirmationMethod, NextAction, NextActionRedirect,
    PaymentIntent, PaymentIntentStatus,
};
pub use source::{
    Source, SourceCard, SourceFlow, SourceOwner, SourceRedirect, SourceStatus, SourceType,
    SourceUsage,
};

/// Anything with a Stripe object id.
pub trait Object {
    fn id(&self) -> Option<&str>;
}

/// A page of a list endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct List<T> {
    pub object: String, // "list"
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub url: Option<String>, // e.g. /v1/invoiceitems
}

impl<T: Object> List<T> {
    /// Parameters for the page after this one, or `None` on the last page.
    ///
    /// `filter` is the filter of the current call; its cursor keys are
    /// replaced with `starting_after` set to the last item of this page.
    pub fn next_page_params(&self, filter: &Params) -> Option<Params> {
        if !self.has_more {
            return None;
        }
        let last_id = self.data.last()?.id()?;
        let mut next = filter.clone();
        next.insert("starting_after", last_id);
        next.insert("ending_before", None::<String>);
        Some(next)
    }
}

/// Response of a delete operation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeletedObject {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    pub deleted: bool,
}
