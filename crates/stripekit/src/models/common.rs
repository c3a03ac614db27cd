//! Shapes shared by several resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Address {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShippingLabel {
    pub address: Option<Address>,
    pub carrier: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tracking_number: Option<String>,
}

/// Billing period of an invoice item or line.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Period {
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TaxRate {
    pub id: String,
    pub object: String, // "tax_rate"
    pub active: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub inclusive: Option<bool>,
    pub jurisdiction: Option<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub percentage: Option<f64>,
}
