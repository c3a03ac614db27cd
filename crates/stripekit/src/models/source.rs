use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::Address;
use super::Object;

/// The Source object.
///
/// Only the detail block matching `source_type` is filled by the API; the
/// others stay `None`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Source {
    pub id: String,
    pub object: String, // "source"
    pub amount: Option<i64>,
    pub client_secret: Option<String>,
    pub code_verification: Option<SourceCodeVerification>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub flow: Option<SourceFlow>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub owner: Option<SourceOwner>,
    pub receiver: Option<SourceReceiver>,
    pub redirect: Option<SourceRedirect>,
    pub statement_descriptor: Option<String>,
    pub status: Option<SourceStatus>,
    #[serde(rename = "type")]
    pub source_type: Option<SourceType>,
    pub usage: Option<SourceUsage>,

    pub ach_credit_transfer: Option<SourceAchCreditTransfer>,
    pub ach_debit: Option<SourceAchDebit>,
    pub card: Option<SourceCard>,
    pub ideal: Option<SourceIdeal>,
    pub sepa_debit: Option<SourceSepaDebit>,
    pub sofort: Option<SourceSofort>,
    pub three_d_secure: Option<SourceThreeDSecure>,
}

impl Object for Source {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceCodeVerification {
    pub attempts_remaining: Option<i64>,
    pub status: Option<String>, // pending, succeeded, failed
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    Redirect,
    Receiver,
    CodeVerification,
    None,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceOwner {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub verified_address: Option<Address>,
    pub verified_email: Option<String>,
    pub verified_name: Option<String>,
    pub verified_phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceReceiver {
    pub address: Option<String>,
    pub amount_charged: Option<i64>,
    pub amount_received: Option<i64>,
    pub amount_returned: Option<i64>,
    pub refund_attributes_method: Option<String>,
    pub refund_attributes_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceRedirect {
    pub failure_reason: Option<String>,
    pub return_url: Option<String>,
    pub status: Option<String>, // pending, succeeded, not_required, failed
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Canceled,
    Chargeable,
    Consumed,
    Failed,
    Pending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    AchCreditTransfer,
    AchDebit,
    Alipay,
    Bancontact,
    Card,
    CardPresent,
    Eps,
    Giropay,
    Ideal,
    Multibanco,
    P24,
    SepaDebit,
    Sofort,
    ThreeDSecure,
    Wechat,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    Reusable,
    SingleUse,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceAchCreditTransfer {
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub fingerprint: Option<String>,
    pub routing_number: Option<String>,
    pub swift_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceAchDebit {
    pub bank_name: Option<String>,
    pub country: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub routing_number: Option<String>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceCard {
    pub address_line1_check: Option<String>,
    pub address_zip_check: Option<String>,
    pub brand: Option<String>,
    pub country: Option<String>,
    pub cvc_check: Option<String>,
    pub dynamic_last4: Option<String>,
    pub exp_month: Option<u32>,
    pub exp_year: Option<u32>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub last4: Option<String>,
    pub name: Option<String>,
    pub three_d_secure: Option<String>,
    pub tokenization_method: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceIdeal {
    pub bank: Option<String>,
    pub bic: Option<String>,
    pub iban_last4: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceSepaDebit {
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub country: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub mandate_reference: Option<String>,
    pub mandate_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceSofort {
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    pub bic: Option<String>,
    pub country: Option<String>,
    pub iban_last4: Option<String>,
    pub verified_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceThreeDSecure {
    pub authenticated: Option<bool>,
    pub brand: Option<String>,
    pub card: Option<String>,
    pub country: Option<String>,
    pub customer: Option<String>,
    pub exp_month: Option<u32>,
    pub exp_year: Option<u32>,
    pub last4: Option<String>,
    pub three_d_secure: Option<String>, // not_supported, required, recommended, optional
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_card_source() {
        let source: Source = serde_json::from_value(serde_json::json!({
            "id": "src_1",
            "object": "source",
            "type": "card",
            "flow": "none",
            "status": "chargeable",
            "usage": "reusable",
            "metadata": {},
            "owner": {"email": "jenny@example.com", "address": {"country": "CH"}},
            "card": {"brand": "Visa", "last4": "4242", "exp_month": 8, "exp_year": 2030}
        }))
        .unwrap();

        assert_eq!(source.source_type, Some(SourceType::Card));
        assert_eq!(source.flow, Some(SourceFlow::None));
        assert_eq!(source.status, Some(SourceStatus::Chargeable));
        let card = source.card.unwrap();
        assert_eq!(card.last4.as_deref(), Some("4242"));
        assert_eq!(card.exp_year, Some(2030));
        let owner = source.owner.unwrap();
        assert_eq!(owner.address.unwrap().country.as_deref(), Some("CH"));
        assert!(source.sepa_debit.is_none());
    }

    #[test]
    fn decodes_three_d_secure_type_name() {
        let source: Source = serde_json::from_str(
            r#"{"id":"src_2","object":"source","type":"three_d_secure","usage":"single_use"}"#,
        )
        .unwrap();
        assert_eq!(source.source_type, Some(SourceType::ThreeDSecure));
        assert_eq!(source.usage, Some(SourceUsage::SingleUse));
    }
}
