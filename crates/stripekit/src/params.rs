//! Request parameter trees and their form encoding.
//!
//! Stripe takes nested parameters as bracketed form keys:
//! `metadata[order_id]=42`, `tax_rates[]=txr_1`,
//! `items[0][price]=price_1`. A [`Params`] tree is built per call and
//! flattened by [`Params::to_pairs`]; [`Params::encode`] percent-encodes the
//! result for a body or query string.
//!
//! Keys are kept in a `BTreeMap`, so the encoded output is identical for
//! identical trees regardless of insertion order.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::error::StripeError;

/// One value of a parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Map(Params),
    List(Vec<Param>),
    /// An unset optional. Contributes nothing to the encoded output.
    Absent,
}

impl Param {
    fn is_scalar(&self) -> bool {
        matches!(
            self,
            Param::Str(_) | Param::Int(_) | Param::Float(_) | Param::Bool(_)
        )
    }

    fn scalar_text(&self) -> Option<String> {
        match self {
            Param::Str(s) => Some(s.clone()),
            Param::Int(i) => Some(i.to_string()),
            Param::Float(f) => Some(f.to_string()),
            Param::Bool(b) => Some(b.to_string()),
            Param::Map(_) | Param::List(_) | Param::Absent => None,
        }
    }

    /// Key of the first float below `key` that has no decimal form.
    fn non_finite_key(&self, key: &str) -> Option<String> {
        match self {
            Param::Float(f) if !f.is_finite() => Some(key.to_string()),
            Param::Map(map) => map
                .0
                .iter()
                .find_map(|(sub_key, value)| value.non_finite_key(&format!("{key}[{sub_key}]"))),
            Param::List(items) => items
                .iter()
                .enumerate()
                .find_map(|(index, item)| item.non_finite_key(&format!("{key}[{index}]"))),
            _ => None,
        }
    }

    fn flatten_into(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            Param::Absent => {}
            Param::Map(map) => {
                for (sub_key, value) in &map.0 {
                    value.flatten_into(&format!("{key}[{sub_key}]"), out);
                }
            }
            Param::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if item.is_scalar() {
                        item.flatten_into(&format!("{key}[]"), out);
                    } else {
                        item.flatten_into(&format!("{key}[{index}]"), out);
                    }
                }
            }
            scalar => {
                if let Some(text) = scalar.scalar_text() {
                    out.push((key.to_string(), text));
                }
            }
        }
    }
}

/// A parameter tree: string keys to [`Param`] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Param>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Copies every entry of `other` into `self`, replacing same-named keys.
    pub fn merge(&mut self, other: &Params) -> &mut Self {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Param)> {
        self.0.iter()
    }

    /// Flattens the tree into unescaped `(key, value)` pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            value.flatten_into(key, &mut pairs);
        }
        pairs
    }

    /// Percent-encodes the flattened tree as `application/x-www-form-urlencoded`.
    ///
    /// Fails with [`StripeError::Encode`] when a float is NaN or infinite.
    pub fn encode(&self) -> Result<String, StripeError> {
        if let Some(key) = self
            .0
            .iter()
            .find_map(|(key, value)| value.non_finite_key(key))
        {
            return Err(StripeError::Encode(format!(
                "{} is not a finite number",
                key
            )));
        }
        serde_urlencoded::to_string(self.to_pairs())
            .map_err(|e| StripeError::Encode(format!("Failed to urlencode params: {}", e)))
    }
}

impl<K: Into<String>, V: Into<Param>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Str(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Param::Str(value.clone())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Int(i64::from(value))
    }
}

impl From<u32> for Param {
    fn from(value: u32) -> Self {
        Param::Int(i64::from(value))
    }
}

impl From<u8> for Param {
    fn from(value: u8) -> Self {
        Param::Int(i64::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

/// Timestamps go over the wire as seconds since the epoch.
impl From<DateTime<Utc>> for Param {
    fn from(value: DateTime<Utc>) -> Self {
        Param::Int(value.timestamp())
    }
}

impl From<Params> for Param {
    fn from(value: Params) -> Self {
        Param::Map(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::Absent, Into::into)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(value: Vec<T>) -> Self {
        Param::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Param>> From<HashMap<K, V>> for Param {
    fn from(value: HashMap<K, V>) -> Self {
        Param::Map(value.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Param>> From<BTreeMap<K, V>> for Param {
    fn from(value: BTreeMap<K, V>) -> Self {
        Param::Map(value.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_tree_encodes_to_empty_string() {
        assert_eq!(Params::new().encode().unwrap(), "");
    }

    #[test]
    fn absent_values_are_omitted() {
        let params = Params::new().with("amount", None::<i64>);
        assert_eq!(params.encode().unwrap(), "");

        let nested = Params::new().with(
            "period",
            Params::new()
                .with("start", 100)
                .with("end", Param::Absent),
        );
        assert_eq!(nested.to_pairs(), pairs(&[("period[start]", "100")]));
    }

    #[test]
    fn nested_map_uses_bracketed_keys() {
        let params = Params::new().with(
            "period",
            Params::new().with("start", 100).with("end", 200),
        );
        let encoded = params.to_pairs();
        assert_eq!(encoded.len(), 2);
        assert!(encoded.contains(&("period[start]".to_string(), "100".to_string())));
        assert!(encoded.contains(&("period[end]".to_string(), "200".to_string())));
    }

    #[test]
    fn deep_nesting_has_no_depth_limit() {
        let params = Params::new().with(
            "a",
            Params::new().with("b", Params::new().with("c", Params::new().with("d", "deep"))),
        );
        assert_eq!(params.to_pairs(), pairs(&[("a[b][c][d]", "deep")]));
    }

    #[test]
    fn scalar_list_preserves_order() {
        let params = Params::new().with("tax_rates", vec!["txr_1", "txr_2"]);
        assert_eq!(
            params.to_pairs(),
            pairs(&[("tax_rates[]", "txr_1"), ("tax_rates[]", "txr_2")])
        );
    }

    #[test]
    fn list_of_maps_is_indexed() {
        let params = Params::new().with(
            "items",
            Param::List(vec![
                Params::new().with("price", "price_1").with("quantity", 2).into(),
                Params::new().with("price", "price_2").into(),
            ]),
        );
        assert_eq!(
            params.to_pairs(),
            pairs(&[
                ("items[0][price]", "price_1"),
                ("items[0][quantity]", "2"),
                ("items[1][price]", "price_2"),
            ])
        );
    }

    #[test]
    fn scalars_use_literal_text() {
        let params = Params::new()
            .with("discountable", true)
            .with("capture", false)
            .with("amount", -250)
            .with("rate", 12.5);
        assert_eq!(
            params.to_pairs(),
            pairs(&[
                ("amount", "-250"),
                ("capture", "false"),
                ("discountable", "true"),
                ("rate", "12.5"),
            ])
        );
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let err = Params::new()
            .with("rate", f64::NAN)
            .with("x", f64::INFINITY)
            .encode()
            .unwrap_err();
        assert!(matches!(err, StripeError::Encode(ref msg) if msg.contains("rate")));

        let nested = Params::new().with(
            "items",
            Param::List(vec![Params::new().with("share", f64::NEG_INFINITY).into()]),
        );
        let err = nested.encode().unwrap_err();
        assert!(matches!(err, StripeError::Encode(ref msg) if msg.contains("items[0][share]")));
    }

    #[test]
    fn encode_percent_escapes_keys_and_values() {
        let params = Params::new()
            .with("description", "Tea & biscuits")
            .with("metadata", Params::new().with("note", "a=b"));
        let encoded = params.encode().unwrap();
        assert_eq!(
            encoded,
            "description=Tea+%26+biscuits&metadata%5Bnote%5D=a%3Db"
        );
    }

    #[test]
    fn encoding_ignores_insertion_order() {
        let a = Params::new().with("b", 2).with("a", 1);
        let b = Params::new().with("a", 1).with("b", 2);
        assert_eq!(a.encode().unwrap(), b.encode().unwrap());
    }

    #[test]
    fn timestamps_encode_as_epoch_seconds() {
        let at = DateTime::from_timestamp(1_483_315_442, 0).unwrap();
        let params = Params::new().with("due_date", at);
        assert_eq!(params.to_pairs(), pairs(&[("due_date", "1483315442")]));
    }

    #[test]
    fn merge_replaces_same_named_keys() {
        let mut base = Params::new().with("limit", 10).with("customer", "cus_1");
        base.merge(&Params::new().with("limit", 3));
        assert_eq!(base.get("limit"), Some(&Param::Int(3)));
        assert_eq!(base.len(), 2);
    }

    proptest! {
        #[test]
        fn scalar_trees_round_trip(
            entries in proptest::collection::btree_map("[a-z_]{1,12}", "\\PC*", 0..8)
        ) {
            let params: Params = entries.clone().into_iter().collect();
            let encoded = params.encode().unwrap();
            let mut decoded: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();
            decoded.sort();
            let expected: Vec<(String, String)> = entries.into_iter().collect();
            prop_assert_eq!(decoded, expected);
        }
    }
}
