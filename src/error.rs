//! Structured error types for tablegroup.
//!
//! The grouping and span functions are total; errors only arise at the
//! boundaries where records or measurements come in as untyped data.

/// All errors that can occur while loading records or measurements.
#[derive(Debug, thiserror::Error)]
pub enum TablegroupError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A measured width was negative or not a finite number.
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// A record has no usable value for the grouping field.
    #[error("Record {id} has no value for {field}")]
    MissingKey { id: String, field: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TablegroupError>;

impl From<String> for TablegroupError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TablegroupError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TablegroupError> for wasm_bindgen::JsValue {
    fn from(e: TablegroupError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
