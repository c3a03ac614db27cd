use chrono::{DateTime, Utc};
use http::Method;
use std::collections::HashMap;

use super::{route_group, ListParams};
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::{DeletedObject, InvoiceItem, List};
use crate::params::Params;

route_group!(
    /// Operations on `/v1/invoiceitems`.
    InvoiceItemRoutes
);

/// Service period of an invoice item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodParams {
    fn to_params(self) -> Params {
        Params::new().with("start", self.start).with("end", self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceItemCreateParams {
    pub customer: String,
    /// Lower-case ISO code, e.g. `usd`.
    pub currency: String,
    /// Either `amount` or `unit_amount` (with `quantity`) must be set.
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    pub invoice: Option<String>,
    pub metadata: HashMap<String, String>,
    pub period: Option<PeriodParams>,
    pub quantity: Option<i64>,
    pub subscription: Option<String>,
    pub tax_rates: Option<Vec<String>>,
    pub unit_amount: Option<i64>,
    pub extra: Params,
}

impl InvoiceItemCreateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("customer", &self.customer)
            .with("amount", self.amount)
            .with("currency", &self.currency)
            .with("description", self.description.clone())
            .with("discountable", self.discountable)
            .with("invoice", self.invoice.clone())
            .with("metadata", self.metadata.clone())
            .with("period", self.period.map(PeriodParams::to_params))
            .with("quantity", self.quantity)
            .with("subscription", self.subscription.clone())
            .with("tax_rates", self.tax_rates.clone())
            .with("unit_amount", self.unit_amount);
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceItemUpdateParams {
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    pub metadata: HashMap<String, String>,
    pub period: Option<PeriodParams>,
    pub quantity: Option<i64>,
    pub tax_rates: Option<Vec<String>>,
    pub unit_amount: Option<i64>,
    pub extra: Params,
}

impl InvoiceItemUpdateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("description", self.description.clone())
            .with("discountable", self.discountable)
            .with("metadata", self.metadata.clone())
            .with("period", self.period.map(PeriodParams::to_params))
            .with("quantity", self.quantity)
            .with("tax_rates", self.tax_rates.clone())
            .with("unit_amount", self.unit_amount);
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceItemListParams {
    pub customer: Option<String>,
    pub invoice: Option<String>,
    /// Only items not yet attached to an invoice.
    pub pending: Option<bool>,
    pub page: ListParams,
}

impl InvoiceItemListParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("customer", self.customer.clone())
            .with("invoice", self.invoice.clone())
            .with("pending", self.pending);
        params.merge(&self.page.to_params());
        params
    }
}

impl InvoiceItemRoutes {
    pub async fn create(&self, params: &InvoiceItemCreateParams) -> Result<InvoiceItem, StripeError> {
        self.client
            .request(
                Method::POST,
                &Endpoint::InvoiceItems.path(),
                &params.to_params(),
                &self.headers,
            )
            .await
    }

    pub async fn retrieve(&self, id: &str) -> Result<InvoiceItem, StripeError> {
        self.client
            .request(
                Method::GET,
                &Endpoint::InvoiceItem(id).path(),
                &Params::new(),
                &self.headers,
            )
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &InvoiceItemUpdateParams,
    ) -> Result<InvoiceItem, StripeError> {
        self.client
            .request(
                Method::POST,
                &Endpoint::InvoiceItem(id).path(),
                &params.to_params(),
                &self.headers,
            )
            .await
    }

    /// Only items not yet on a finalized invoice can be deleted.
    pub async fn delete(&self, id: &str) -> Result<DeletedObject, StripeError> {
        self.client
            .request(
                Method::DELETE,
                &Endpoint::InvoiceItem(id).path(),
                &Params::new(),
                &self.headers,
            )
            .await
    }

    pub async fn list(&self, params: &InvoiceItemListParams) -> Result<List<InvoiceItem>, StripeError> {
        self.client
            .request(
                Method::GET,
                &Endpoint::InvoiceItems.path(),
                &params.to_params(),
                &self.headers,
            )
            .await
    }
}
