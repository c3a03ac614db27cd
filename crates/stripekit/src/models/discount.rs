use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    Forever,
    Once,
    Repeating,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub object: String, // "coupon"
    pub amount_off: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub duration: Option<CouponDuration>,
    pub duration_in_months: Option<i64>,
    pub livemode: Option<bool>,
    pub max_redemptions: Option<i64>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub name: Option<String>,
    pub percent_off: Option<f64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub redeem_by: Option<DateTime<Utc>>,
    pub times_redeemed: Option<i64>,
    pub valid: Option<bool>,
}

/// A coupon applied to a customer or subscription.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Discount {
    pub object: String, // "discount"
    pub coupon: Option<Coupon>,
    pub customer: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    pub subscription: Option<String>,
}
