use http::Method;
use std::collections::HashMap;

use super::{route_group, wire_name, ListParams};
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::{CancellationReason, CaptureMethod, ConfirmationMethod, List, PaymentIntent};
use crate::params::Params;

route_group!(
    /// Operations on `/v1/payment_intents`.
    PaymentIntentRoutes
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentCreateParams {
    pub amount: i64,
    pub currency: String,
    pub application_fee_amount: Option<i64>,
    pub capture_method: Option<CaptureMethod>,
    pub confirm: Option<bool>,
    pub confirmation_method: Option<ConfirmationMethod>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub metadata: HashMap<String, String>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_types: Option<Vec<String>>,
    pub receipt_email: Option<String>,
    pub return_url: Option<String>,
    pub save_payment_method: Option<bool>,
    pub source: Option<String>,
    pub statement_descriptor: Option<String>,
    pub transfer_group: Option<String>,
    /// Shipping, transfer data and other nested keys.
    pub extra: Params,
}

impl PaymentIntentCreateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("currency", &self.currency)
            .with("application_fee_amount", self.application_fee_amount)
            .with("capture_method", wire_name(self.capture_method))
            .with("confirm", self.confirm)
            .with("confirmation_method", wire_name(self.confirmation_method))
            .with("customer", self.customer.clone())
            .with("description", self.description.clone())
            .with("metadata", self.metadata.clone())
            .with("on_behalf_of", self.on_behalf_of.clone())
            .with("payment_method", self.payment_method.clone())
            .with("payment_method_types", self.payment_method_types.clone())
            .with("receipt_email", self.receipt_email.clone())
            .with("return_url", self.return_url.clone())
            .with("save_payment_method", self.save_payment_method)
            .with("source", self.source.clone())
            .with("statement_descriptor", self.statement_descriptor.clone())
            .with("transfer_group", self.transfer_group.clone());
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentUpdateParams {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub application_fee_amount: Option<i64>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub metadata: HashMap<String, String>,
    pub payment_method: Option<String>,
    pub payment_method_types: Option<Vec<String>>,
    pub receipt_email: Option<String>,
    pub save_payment_method: Option<bool>,
    pub source: Option<String>,
    pub statement_descriptor: Option<String>,
    pub transfer_group: Option<String>,
    pub extra: Params,
}

impl PaymentIntentUpdateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("currency", self.currency.clone())
            .with("application_fee_amount", self.application_fee_amount)
            .with("customer", self.customer.clone())
            .with("description", self.description.clone())
            .with("metadata", self.metadata.clone())
            .with("payment_method", self.payment_method.clone())
            .with("payment_method_types", self.payment_method_types.clone())
            .with("receipt_email", self.receipt_email.clone())
            .with("save_payment_method", self.save_payment_method)
            .with("source", self.source.clone())
            .with("statement_descriptor", self.statement_descriptor.clone())
            .with("transfer_group", self.transfer_group.clone());
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentConfirmParams {
    /// Required when confirming with a publishable key.
    pub client_secret: Option<String>,
    pub off_session: Option<bool>,
    pub payment_method: Option<String>,
    pub receipt_email: Option<String>,
    pub return_url: Option<String>,
    pub save_payment_method: Option<bool>,
    pub source: Option<String>,
    pub extra: Params,
}

impl PaymentIntentConfirmParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("client_secret", self.client_secret.clone())
            .with("off_session", self.off_session)
            .with("payment_method", self.payment_method.clone())
            .with("receipt_email", self.receipt_email.clone())
            .with("return_url", self.return_url.clone())
            .with("save_payment_method", self.save_payment_method)
            .with("source", self.source.clone());
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentCaptureParams {
    /// Defaults to the full capturable amount.
    pub amount_to_capture: Option<i64>,
    pub application_fee_amount: Option<i64>,
    pub extra: Params,
}

impl PaymentIntentCaptureParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount_to_capture", self.amount_to_capture)
            .with("application_fee_amount", self.application_fee_amount);
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentCancelParams {
    pub cancellation_reason: Option<CancellationReason>,
    pub extra: Params,
}

impl PaymentIntentCancelParams {
    pub fn to_params(&self) -> Params {
        let mut params =
            Params::new().with("cancellation_reason", wire_name(self.cancellation_reason));
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentIntentListParams {
    pub customer: Option<String>,
    pub page: ListParams,
}

impl PaymentIntentListParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new().with("customer", self.customer.clone());
        params.merge(&self.page.to_params());
        params
    }
}

impl PaymentIntentRoutes {
    pub async fn create(
        &self,
        params: &PaymentIntentCreateParams,
    ) -> Result<PaymentIntent, StripeError> {
        self.post(&Endpoint::PaymentIntents, &params.to_params()).await
    }

    /// `client_secret` is required when retrieving with a publishable key.
    pub async fn retrieve(
        &self,
        id: &str,
        client_secret: Option<&str>,
    ) -> Result<PaymentIntent, StripeError> {
        let params = Params::new().with("client_secret", client_secret);
        self.client
            .request(Method::GET, &Endpoint::PaymentIntent(id).path(), &params, &self.headers)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &PaymentIntentUpdateParams,
    ) -> Result<PaymentIntent, StripeError> {
        self.post(&Endpoint::PaymentIntent(id), &params.to_params()).await
    }

    pub async fn confirm(
        &self,
        id: &str,
        params: &PaymentIntentConfirmParams,
    ) -> Result<PaymentIntent, StripeError> {
        self.post(&Endpoint::PaymentIntentConfirm(id), &params.to_params()).await
    }

    pub async fn capture(
        &self,
        id: &str,
        params: &PaymentIntentCaptureParams,
    ) -> Result<PaymentIntent, StripeError> {
        self.post(&Endpoint::PaymentIntentCapture(id), &params.to_params()).await
    }

    pub async fn cancel(
        &self,
        id: &str,
        params: &PaymentIntentCancelParams,
    ) -> Result<PaymentIntent, StripeError> {
        self.post(&Endpoint::PaymentIntentCancel(id), &params.to_params()).await
    }

    pub async fn list(
        &self,
        params: &PaymentIntentListParams,
    ) -> Result<List<PaymentIntent>, StripeError> {
        self.client
            .request(
                Method::GET,
                &Endpoint::PaymentIntents.path(),
                &params.to_params(),
                &self.headers,
            )
            .await
    }

    async fn post(
        &self,
        endpoint: &Endpoint<'_>,
        params: &Params,
    ) -> Result<PaymentIntent, StripeError> {
        self.client
            .request(Method::POST, &endpoint.path(), params, &self.headers)
            .await
    }
}
