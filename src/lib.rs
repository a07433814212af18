//! tablegroup - grouped index tables for the web
//!
//! The logic behind a table whose rows are grouped under subheader rows:
//! - Single-pass grouping of a flat record list, in first-seen key order
//! - Tri-state (selected / indeterminate / unselected) subheader checkboxes
//! - Sizing the subheader `colspan` to the header columns that fit the
//!   visible width, recomputed on container resize
//!
//! # Usage (Rust)
//!
//! ```
//! use tablegroup::grouping::group_by_key;
//! use tablegroup::layout::count_visible_columns;
//! use tablegroup::sample::sample_customers;
//! use tablegroup::CustomerRow;
//!
//! let customers = sample_customers();
//! let groups = group_by_key(&customers, CustomerRow::last_order_date);
//! assert_eq!(groups.len(), 3);
//! assert_eq!(count_visible_columns(100.0, &[40.0, 40.0, 40.0]), 1);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { groupRecords, SubheaderSpanObserver } from 'tablegroup';
//! await init();
//! const groups = groupRecords(rows, 'lastOrderDate', selectedIds, 'order');
//! const observer = new SubheaderSpanObserver(container, (_, colSpan) => render(colSpan));
//! ```

pub mod error;
pub mod grouping;
pub mod layout;
pub mod sample;
pub mod selection;
pub mod summary;
pub mod types;

// DOM observation (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::layout::ColumnMeasurement;

#[cfg(target_arch = "wasm32")]
pub use viewer::SubheaderSpanObserver;

pub use types::*;

/// Serialize with plain objects for maps, which flattened records need.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Group an array of plain objects by one of their string fields.
///
/// # Arguments
/// * `records` - Array of row objects, each with a string `id`
/// * `key_field` - Name of the field to group by
/// * `selected_ids` - Optional array of selected row ids
/// * `id_prefix` - Prefix for the subheader row ids (defaults to `"group"`)
///
/// # Returns
/// An array of groups in first-seen order, each with `id`, `key`,
/// `firstPosition`, `members`, `selectionRange` and `selected`.
///
/// # Errors
/// Returns an error if `records` is not an array of objects or a record has
/// no string value for `key_field`.
#[wasm_bindgen(js_name = groupRecords)]
pub fn group_records(
    records: JsValue,
    key_field: &str,
    selected_ids: JsValue,
    id_prefix: Option<String>,
) -> Result<JsValue, JsValue> {
    let records: Vec<JsonRecord> = serde_wasm_bindgen::from_value(records)?;
    let selection: ResourceSelection = if selected_ids.is_undefined() || selected_ids.is_null() {
        ResourceSelection::new()
    } else {
        serde_wasm_bindgen::from_value(selected_ids)?
    };

    let groups = grouping::try_group_by_key(&records, |r| r.str_field(key_field))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let prefix = id_prefix.as_deref().unwrap_or("group");
    to_js(&summary::summarize(&groups, prefix, &selection))
}

/// Number of data columns the subheader may span.
///
/// # Errors
/// Returns an error if any width is negative or not a finite number.
#[wasm_bindgen(js_name = countVisibleColumns)]
pub fn count_visible_columns(container_width: f64, cell_widths: Vec<f64>) -> Result<i32, JsValue> {
    let measurement = ColumnMeasurement::validated(container_width, cell_widths)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(measurement.visible_column_span())
}

/// Check state for a subheader: `true`, `false` or `"indeterminate"`.
///
/// # Errors
/// Returns an error if the result cannot be converted to a JS value.
#[wasm_bindgen(js_name = selectionState)]
#[allow(clippy::needless_pass_by_value)]
pub fn selection_state(member_ids: Vec<String>, selected_ids: Vec<String>) -> Result<JsValue, JsValue> {
    let selected = selected_ids.into_iter().collect();
    let state = selection::members_selection_state(member_ids.iter().map(String::as_str), &selected);
    to_js(&state)
}

/// The built-in demo customers.
///
/// # Errors
/// Returns an error if the rows cannot be converted to JS values.
#[wasm_bindgen(js_name = sampleCustomers)]
pub fn sample_customers() -> Result<JsValue, JsValue> {
    to_js(&sample::sample_customers())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
