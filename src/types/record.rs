use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TablegroupError};

/// A row that can be grouped and selected.
///
/// Only the identifier is needed by the engine; the grouping key is supplied
/// separately as a closure so one row type can be grouped several ways.
pub trait Record {
    /// Unique identifier used for selection bookkeeping.
    fn id(&self) -> &str;
}

/// One customer in the demo index table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default)]
    pub orders: u32,
    /// Formatted currency string, e.g. "$2,400"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub amount_spent: String,
    /// Date label the demo groups by, e.g. "May 31, 2023"
    pub last_order_date: String,
}

impl Record for CustomerRow {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CustomerRow {
    /// Grouping key used by the demo table.
    pub fn last_order_date(&self) -> &str {
        &self.last_order_date
    }
}

/// A record of arbitrary shape, as received from JSON or JavaScript.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct JsonRecord(pub Map<String, Value>);

impl Record for JsonRecord {
    /// Rows without a string `id` share the empty identifier.
    fn id(&self) -> &str {
        self.0.get("id").and_then(Value::as_str).unwrap_or_default()
    }
}

impl JsonRecord {
    /// Look up a string field to group by.
    ///
    /// # Errors
    /// Returns [`TablegroupError::MissingKey`] when the field is absent or is
    /// not a string.
    pub fn str_field(&self, field: &str) -> Result<&str> {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| TablegroupError::MissingKey {
                id: self.id().to_string(),
                field: field.to_string(),
            })
    }
}

impl From<Map<String, Value>> for JsonRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
