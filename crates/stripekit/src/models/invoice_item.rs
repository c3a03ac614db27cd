use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{Period, TaxRate};
use super::Object;

/// An item added to a draft or upcoming invoice.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InvoiceItem {
    pub id: Option<String>,
    pub object: String, // "invoiceitem"
    /// Always `unit_amount * quantity`.
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    pub invoice: Option<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub period: Option<Period>,
    pub proration: Option<bool>,
    pub quantity: Option<i64>,
    pub subscription: Option<String>,
    pub subscription_item: Option<String>,
    pub tax_rates: Option<Vec<TaxRate>>,
    pub unit_amount: Option<i64>,
}

impl Object for InvoiceItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_period_and_tax_rates() {
        let item: InvoiceItem = serde_json::from_str(
            r#"{
                "id": "ii_1",
                "object": "invoiceitem",
                "amount": 2500,
                "currency": "chf",
                "period": {"start": 100, "end": 200},
                "tax_rates": [{"id": "txr_1", "object": "tax_rate", "percentage": 7.7, "inclusive": false}],
                "metadata": {"order": "42"}
            }"#,
        )
        .unwrap();

        let period = item.period.unwrap();
        assert_eq!(period.start.map(|d| d.timestamp()), Some(100));
        assert_eq!(period.end.map(|d| d.timestamp()), Some(200));
        let rates = item.tax_rates.unwrap();
        assert_eq!(rates[0].id, "txr_1");
        assert_eq!(rates[0].percentage, Some(7.7));
        assert_eq!(item.metadata.get("order").map(String::as_str), Some("42"));
        assert!(item.date.is_none());
    }
}
