use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{Address, Period, ShippingLabel, TaxRate};
use super::discount::Discount;
use super::{List, Object};

/// The Invoice object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Invoice {
    pub id: Option<String>,
    pub object: String, // "invoice"
    pub account_country: Option<String>,
    pub account_name: Option<String>,
    pub amount_due: Option<i64>,
    pub amount_paid: Option<i64>,
    pub amount_remaining: Option<i64>,
    pub application_fee_amount: Option<i64>,
    pub attempt_count: Option<i64>,
    pub attempted: Option<bool>,
    pub auto_advance: Option<bool>,
    pub billing: Option<InvoiceBilling>,
    pub billing_reason: Option<InvoiceBillingReason>,
    pub charge: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub custom_fields: Option<Vec<HashMap<String, String>>>,
    pub customer: Option<String>,
    pub customer_address: Option<Address>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_shipping: Option<ShippingLabel>,
    pub customer_tax_exempt: Option<String>,
    pub customer_tax_ids: Option<Vec<InvoiceCustomerTaxId>>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Option<Vec<TaxRate>>,
    pub description: Option<String>,
    pub discount: Option<Discount>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub due_date: Option<DateTime<Utc>>,
    pub ending_balance: Option<i64>,
    pub footer: Option<String>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
    pub lines: Option<List<InvoiceLineItem>>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub next_payment_attempt: Option<DateTime<Utc>>,
    pub number: Option<String>,
    pub paid: Option<bool>,
    pub payment_intent: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_start: Option<DateTime<Utc>>,
    pub post_payment_credit_notes_amount: Option<i64>,
    pub pre_payment_credit_notes_amount: Option<i64>,
    pub receipt_number: Option<String>,
    pub starting_balance: Option<i64>,
    pub statement_descriptor: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub status_transitions: Option<InvoiceStatusTransitions>,
    pub subscription: Option<String>,
    pub subscription_proration_date: Option<i64>,
    pub subtotal: Option<i64>,
    pub tax: Option<i64>,
    pub threshold_reason: Option<InvoiceThresholdReason>,
    pub total: Option<i64>,
    pub total_tax_amounts: Option<Vec<InvoiceTotalTaxAmount>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub webhooks_delivered_at: Option<DateTime<Utc>>,
}

impl Object for Invoice {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceBilling {
    ChargeAutomatically,
    SendInvoice,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceBillingReason {
    SubscriptionCycle,
    SubscriptionCreate,
    SubscriptionUpdate,
    Subscription,
    Manual,
    Upcoming,
    SubscriptionThreshold,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvoiceCustomerTaxId {
    #[serde(rename = "type")]
    pub tax_id_type: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvoiceStatusTransitions {
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub finalized_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub marked_uncollectible_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub voided_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvoiceThresholdReason {
    pub amount_gte: Option<i64>,
    pub item_reasons: Option<Vec<InvoiceThresholdItemReason>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvoiceThresholdItemReason {
    pub line_item_ids: Option<Vec<String>>,
    pub usage_gte: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvoiceTotalTaxAmount {
    pub amount: Option<i64>,
    pub inclusive: Option<bool>,
    pub tax_rate: Option<String>,
}

/// One line of an invoice.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InvoiceLineItem {
    pub id: String,
    pub object: String, // "line_item"
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    pub invoice_item: Option<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub period: Option<Period>,
    pub proration: Option<bool>,
    pub quantity: Option<i64>,
    pub subscription: Option<String>,
    pub subscription_item: Option<String>,
    pub tax_rates: Option<Vec<TaxRate>>,
    #[serde(rename = "type")]
    pub line_type: Option<String>,
}

impl Object for InvoiceLineItem {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_lines_and_transitions() {
        let invoice: Invoice = serde_json::from_value(serde_json::json!({
            "id": "in_1",
            "object": "invoice",
            "amount_due": 1500,
            "billing": "send_invoice",
            "billing_reason": "manual",
            "status": "open",
            "due_date": 1_560_000_000,
            "status_transitions": {"finalized_at": 1_559_000_000, "paid_at": null},
            "lines": {
                "object": "list",
                "has_more": false,
                "url": "/v1/invoices/in_1/lines",
                "data": [{"id": "il_1", "object": "line_item", "amount": 1500, "type": "invoiceitem"}]
            }
        }))
        .unwrap();

        assert_eq!(invoice.status, Some(InvoiceStatus::Open));
        assert_eq!(invoice.billing, Some(InvoiceBilling::SendInvoice));
        assert_eq!(invoice.billing_reason, Some(InvoiceBillingReason::Manual));
        assert_eq!(invoice.due_date.map(|d| d.timestamp()), Some(1_560_000_000));
        let transitions = invoice.status_transitions.unwrap();
        assert!(transitions.finalized_at.is_some());
        assert!(transitions.paid_at.is_none());
        let lines = invoice.lines.unwrap();
        assert_eq!(lines.data[0].id, "il_1");
        assert_eq!(lines.data[0].line_type.as_deref(), Some("invoiceitem"));
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let invoice: Invoice =
            serde_json::from_str(r#"{"object":"invoice","status":"in_review"}"#).unwrap();
        assert_eq!(invoice.status, Some(InvoiceStatus::Unknown));
    }
}
