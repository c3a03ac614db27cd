use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::ShippingLabel;
use super::{List, Object};
use crate::error::ApiErrorDetails;

/// The PaymentIntent object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    pub object: String, // "payment_intent"
    pub amount: Option<i64>,
    pub amount_capturable: Option<i64>,
    pub amount_received: Option<i64>,
    pub application: Option<String>,
    pub application_fee_amount: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<CancellationReason>,
    pub capture_method: Option<CaptureMethod>,
    /// Charges are kept as raw JSON; their schema is not modelled here.
    pub charges: Option<List<serde_json::Value>>,
    pub client_secret: Option<String>,
    pub confirmation_method: Option<ConfirmationMethod>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub invoice: Option<String>,
    pub last_payment_error: Option<ApiErrorDetails>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub next_action: Option<NextAction>,
    pub on_behalf_of: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_types: Option<Vec<String>>,
    pub receipt_email: Option<String>,
    pub review: Option<String>,
    pub shipping: Option<ShippingLabel>,
    pub source: Option<String>,
    pub statement_descriptor: Option<String>,
    pub status: Option<PaymentIntentStatus>,
    pub transfer_data: Option<HashMap<String, String>>,
    pub transfer_group: Option<String>,
}

impl Object for PaymentIntent {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    Duplicate,
    Fraudulent,
    RequestedByCustomer,
    FailedInvoice,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    Manual,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationMethod {
    Automatic,
    Manual,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NextAction {
    pub redirect_to_url: Option<NextActionRedirect>,
    #[serde(rename = "type")]
    pub action_type: Option<String>, // "redirect_to_url" or "use_stripe_sdk"
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NextActionRedirect {
    pub return_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_status_next_action_and_last_error() {
        let intent: PaymentIntent = serde_json::from_value(serde_json::json!({
            "id": "pi_1",
            "object": "payment_intent",
            "amount": 2000,
            "currency": "eur",
            "capture_method": "manual",
            "confirmation_method": "automatic",
            "status": "requires_action",
            "created": 1_555_000_000,
            "next_action": {
                "type": "redirect_to_url",
                "redirect_to_url": {"url": "https://hooks.stripe.com/3d", "return_url": "https://example.com"}
            },
            "last_payment_error": {
                "type": "card_error",
                "code": "card_declined",
                "decline_code": "insufficient_funds",
                "message": "Your card has insufficient funds."
            },
            "charges": {"object": "list", "has_more": false, "url": "/v1/charges", "data": []}
        }))
        .unwrap();

        assert_eq!(intent.status, Some(PaymentIntentStatus::RequiresAction));
        assert_eq!(intent.capture_method, Some(CaptureMethod::Manual));
        let redirect = intent.next_action.unwrap().redirect_to_url.unwrap();
        assert_eq!(redirect.url.as_deref(), Some("https://hooks.stripe.com/3d"));
        let error = intent.last_payment_error.unwrap();
        assert_eq!(error.decline_code.as_deref(), Some("insufficient_funds"));
        assert!(intent.charges.unwrap().data.is_empty());
    }
}
