use chrono::{DateTime, Utc};
use http::Method;
use std::collections::HashMap;

use super::{route_group, wire_name, ListParams};
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::{DeletedObject, Invoice, InvoiceBilling, InvoiceLineItem, List};
use crate::params::Params;

route_group!(
    /// Operations on `/v1/invoices`, including the state transitions of an
    /// invoice (finalize, pay, send, void, mark uncollectible).
    InvoiceRoutes
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceCreateParams {
    pub customer: String,
    pub application_fee_amount: Option<i64>,
    pub auto_advance: Option<bool>,
    pub billing: Option<InvoiceBilling>,
    pub custom_fields: Vec<(String, String)>,
    pub days_until_due: Option<u32>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Option<Vec<String>>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub footer: Option<String>,
    pub metadata: HashMap<String, String>,
    pub statement_descriptor: Option<String>,
    pub subscription: Option<String>,
    pub extra: Params,
}

impl InvoiceCreateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("customer", &self.customer)
            .with("application_fee_amount", self.application_fee_amount)
            .with("auto_advance", self.auto_advance)
            .with("billing", wire_name(self.billing))
            .with("custom_fields", custom_fields(&self.custom_fields))
            .with("days_until_due", self.days_until_due)
            .with("default_payment_method", self.default_payment_method.clone())
            .with("default_source", self.default_source.clone())
            .with("default_tax_rates", self.default_tax_rates.clone())
            .with("description", self.description.clone())
            .with("due_date", self.due_date)
            .with("footer", self.footer.clone())
            .with("metadata", self.metadata.clone())
            .with("statement_descriptor", self.statement_descriptor.clone())
            .with("subscription", self.subscription.clone());
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceUpdateParams {
    pub application_fee_amount: Option<i64>,
    pub auto_advance: Option<bool>,
    pub custom_fields: Vec<(String, String)>,
    pub days_until_due: Option<u32>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Option<Vec<String>>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub footer: Option<String>,
    pub metadata: HashMap<String, String>,
    pub statement_descriptor: Option<String>,
    pub extra: Params,
}

impl InvoiceUpdateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("application_fee_amount", self.application_fee_amount)
            .with("auto_advance", self.auto_advance)
            .with("custom_fields", custom_fields(&self.custom_fields))
            .with("days_until_due", self.days_until_due)
            .with("default_payment_method", self.default_payment_method.clone())
            .with("default_source", self.default_source.clone())
            .with("default_tax_rates", self.default_tax_rates.clone())
            .with("description", self.description.clone())
            .with("due_date", self.due_date)
            .with("footer", self.footer.clone())
            .with("metadata", self.metadata.clone())
            .with("statement_descriptor", self.statement_descriptor.clone());
        params.merge(&self.extra);
        params
    }
}

/// Options of an explicit payment attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoicePayParams {
    /// Settle the invoice out of band without charging anything.
    pub paid_out_of_band: Option<bool>,
    pub payment_method: Option<String>,
    pub source: Option<String>,
    pub forgive: Option<bool>,
    pub off_session: Option<bool>,
    pub extra: Params,
}

impl InvoicePayParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("paid_out_of_band", self.paid_out_of_band)
            .with("payment_method", self.payment_method.clone())
            .with("source", self.source.clone())
            .with("forgive", self.forgive)
            .with("off_session", self.off_session);
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpcomingInvoiceParams {
    pub customer: Option<String>,
    pub coupon: Option<String>,
    pub subscription: Option<String>,
    pub subscription_prorate: Option<bool>,
    pub subscription_proration_date: Option<DateTime<Utc>>,
    /// Further preview keys, e.g. `subscription_items`.
    pub extra: Params,
}

impl UpcomingInvoiceParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("customer", self.customer.clone())
            .with("coupon", self.coupon.clone())
            .with("subscription", self.subscription.clone())
            .with("subscription_prorate", self.subscription_prorate)
            .with("subscription_proration_date", self.subscription_proration_date);
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceListParams {
    pub customer: Option<String>,
    pub billing: Option<InvoiceBilling>,
    pub subscription: Option<String>,
    pub page: ListParams,
}

impl InvoiceListParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("customer", self.customer.clone())
            .with("billing", wire_name(self.billing))
            .with("subscription", self.subscription.clone());
        params.merge(&self.page.to_params());
        params
    }
}

// custom_fields[i][name], custom_fields[i][value]
fn custom_fields(fields: &[(String, String)]) -> Vec<Params> {
    fields
        .iter()
        .map(|(name, value)| Params::new().with("name", name).with("value", value))
        .collect()
}

impl InvoiceRoutes {
    pub async fn create(&self, params: &InvoiceCreateParams) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::Invoices, &params.to_params()).await
    }

    pub async fn retrieve(&self, id: &str) -> Result<Invoice, StripeError> {
        self.client
            .request(Method::GET, &Endpoint::Invoice(id).path(), &Params::new(), &self.headers)
            .await
    }

    pub async fn update(&self, id: &str, params: &InvoiceUpdateParams) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::Invoice(id), &params.to_params()).await
    }

    /// Deletes a draft invoice.
    pub async fn delete(&self, id: &str) -> Result<DeletedObject, StripeError> {
        self.client
            .request(Method::DELETE, &Endpoint::Invoice(id).path(), &Params::new(), &self.headers)
            .await
    }

    pub async fn finalize(&self, id: &str, auto_advance: Option<bool>) -> Result<Invoice, StripeError> {
        let params = Params::new().with("auto_advance", auto_advance);
        self.post(&Endpoint::InvoiceFinalize(id), &params).await
    }

    pub async fn pay(&self, id: &str, params: &InvoicePayParams) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::InvoicePay(id), &params.to_params()).await
    }

    /// Emails the invoice to the customer.
    pub async fn send(&self, id: &str) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::InvoiceSend(id), &Params::new()).await
    }

    pub async fn void(&self, id: &str) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::InvoiceVoid(id), &Params::new()).await
    }

    pub async fn mark_uncollectible(&self, id: &str) -> Result<Invoice, StripeError> {
        self.post(&Endpoint::InvoiceMarkUncollectible(id), &Params::new()).await
    }

    pub async fn retrieve_lines(
        &self,
        id: &str,
        page: &ListParams,
    ) -> Result<List<InvoiceLineItem>, StripeError> {
        self.client
            .request(Method::GET, &Endpoint::InvoiceLines(id).path(), &page.to_params(), &self.headers)
            .await
    }

    /// Preview of the next invoice of a customer or subscription.
    pub async fn upcoming(&self, params: &UpcomingInvoiceParams) -> Result<Invoice, StripeError> {
        self.client
            .request(
                Method::GET,
                &Endpoint::UpcomingInvoice.path(),
                &params.to_params(),
                &self.headers,
            )
            .await
    }

    pub async fn list(&self, params: &InvoiceListParams) -> Result<List<Invoice>, StripeError> {
        self.client
            .request(Method::GET, &Endpoint::Invoices.path(), &params.to_params(), &self.headers)
            .await
    }

    async fn post(&self, endpoint: &Endpoint<'_>, params: &Params) -> Result<Invoice, StripeError> {
        self.client
            .request(Method::POST, &endpoint.path(), params, &self.headers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_encode_billing_and_custom_fields() {
        let params = InvoiceCreateParams {
            customer: "cus_1".to_string(),
            billing: Some(InvoiceBilling::SendInvoice),
            days_until_due: Some(30),
            custom_fields: vec![("PO".to_string(), "4711".to_string())],
            ..Default::default()
        };
        let pairs = params.to_params().to_pairs();
        assert!(pairs.contains(&("billing".to_string(), "send_invoice".to_string())));
        assert!(pairs.contains(&("custom_fields[0][name]".to_string(), "PO".to_string())));
        assert!(pairs.contains(&("custom_fields[0][value]".to_string(), "4711".to_string())));
        assert!(pairs.contains(&("days_until_due".to_string(), "30".to_string())));
        assert_eq!(pairs.len(), 5);
    }

    #[test]
    fn empty_update_encodes_nothing() {
        assert_eq!(InvoiceUpdateParams::default().to_params().encode().unwrap(), "");
    }

    #[test]
    fn upcoming_params_encode_proration_date_as_seconds() {
        let params = UpcomingInvoiceParams {
            subscription: Some("sub_1".to_string()),
            subscription_proration_date: DateTime::from_timestamp(1_560_000_000, 0),
            ..Default::default()
        };
        assert_eq!(
            params.to_params().encode().unwrap(),
            "subscription=sub_1&subscription_proration_date=1560000000"
        );
    }
}
