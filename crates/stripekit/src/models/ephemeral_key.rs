use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Object;

/// Short-lived key handed to a mobile client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EphemeralKey {
    pub id: String,
    pub object: String, // "ephemeral_key"
    #[serde(default)]
    pub associated_objects: Vec<HashMap<String, String>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires: Option<DateTime<Utc>>,
    pub livemode: Option<bool>,
    /// Only present in the response to a create call.
    pub secret: Option<String>,
}

impl Object for EphemeralKey {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
