//! How many leading data columns fit in the visible width.
//!
//! A group subheader cell spans the data columns of the header row. If it
//! spanned columns scrolled out of view its text would run under them, so the
//! span is sized from the header cells that fit the container.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TablegroupError};

/// Leading columns excluded from the span (the row checkbox column).
pub const SELECTION_COLUMNS: u32 = 1;

/// Count the header cells that fit `container_width`, minus the checkbox
/// column.
///
/// Widths accumulate left to right and the scan stops at the first cell whose
/// running total exceeds the container; a cell that fills it exactly still
/// counts. The result ranges over `[-1, cell_widths.len() - 1]`, where `-1`
/// and `0` mean no data column fits.
///
/// ```
/// use tablegroup::layout::count_visible_columns;
/// assert_eq!(count_visible_columns(120.0, &[40.0, 40.0, 40.0]), 2);
/// assert_eq!(count_visible_columns(100.0, &[40.0, 40.0, 40.0]), 1);
/// assert_eq!(count_visible_columns(80.0, &[40.0, 40.0, 40.0]), 1);
/// assert_eq!(count_visible_columns(300.0, &[]), -1);
/// ```
pub fn count_visible_columns(container_width: f64, cell_widths: &[f64]) -> i32 {
    count_visible_columns_with(container_width, cell_widths, SELECTION_COLUMNS)
}

/// [`count_visible_columns`] with a configurable number of reserved leading
/// columns.
pub fn count_visible_columns_with(container_width: f64, cell_widths: &[f64], reserved: u32) -> i32 {
    debug_assert!(
        cell_widths.iter().all(|w| w.is_finite() && *w >= 0.0),
        "cell widths must be finite and non-negative: {cell_widths:?}"
    );

    let reserved = i32::try_from(reserved).unwrap_or(i32::MAX);
    if container_width.is_nan() || container_width <= 0.0 {
        return -reserved;
    }

    let mut visible: i32 = 0;
    let mut accumulated: f64 = 0.0;
    for &width in cell_widths {
        accumulated += width;
        if accumulated > container_width {
            break;
        }
        visible = visible.saturating_add(1);
    }
    visible.saturating_sub(reserved)
}

/// One snapshot of the header row, taken on mount or after a resize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeasurement {
    /// Width of the scrollable container in CSS pixels
    pub container_width: f64,
    /// Header cell widths, left to right, checkbox column first
    pub cell_widths: Vec<f64>,
}

impl ColumnMeasurement {
    pub fn new(container_width: f64, cell_widths: Vec<f64>) -> Self {
        Self {
            container_width,
            cell_widths,
        }
    }

    /// Build a measurement from untrusted numbers.
    ///
    /// # Errors
    /// Returns [`TablegroupError::InvalidMeasurement`] if the container width
    /// is not finite or any cell width is negative or not finite.
    pub fn validated(container_width: f64, cell_widths: Vec<f64>) -> Result<Self> {
        let problem = if container_width.is_finite() {
            cell_widths
                .iter()
                .enumerate()
                .find(|(_, w)| !w.is_finite() || **w < 0.0)
                .map(|(i, w)| format!("cell {i} has width {w}"))
        } else {
            Some(format!("container width {container_width}"))
        };

        match problem {
            Some(reason) => {
                tracing::debug!(%reason, "rejected column measurement");
                Err(TablegroupError::InvalidMeasurement(reason))
            }
            None => Ok(Self::new(container_width, cell_widths)),
        }
    }

    /// Span for the subheader cell; see [`count_visible_columns`].
    pub fn visible_column_span(&self) -> i32 {
        count_visible_columns(self.container_width, &self.cell_widths)
    }
}

/// Tunables for turning a measurement into a `colspan` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpanConfig {
    /// Leading columns the subheader must not cover
    pub reserved_columns: u32,
    /// Smallest span handed to the rendering layer
    pub min_display_span: u32,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            reserved_columns: SELECTION_COLUMNS,
            min_display_span: 1,
        }
    }
}

impl SpanConfig {
    /// Raw span for `measurement`, may be negative.
    pub fn span(&self, measurement: &ColumnMeasurement) -> i32 {
        count_visible_columns_with(
            measurement.container_width,
            &measurement.cell_widths,
            self.reserved_columns,
        )
    }

    /// Clamp a raw span to a usable `colspan`.
    pub fn display_span(&self, span: i32) -> u32 {
        u32::try_from(span).unwrap_or(0).max(self.min_display_span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_columns() {
        let widths = [40.0, 40.0, 40.0];
        assert_eq!(count_visible_columns_with(200.0, &widths, 0), 3);
        assert_eq!(count_visible_columns_with(200.0, &widths, 2), 1);
        assert_eq!(count_visible_columns_with(0.0, &widths, 0), 0);
    }

    #[test]
    fn test_nan_container_fits_nothing() {
        assert_eq!(count_visible_columns(f64::NAN, &[10.0]), -1);
    }

    #[test]
    fn test_validated_rejects_bad_widths() {
        assert!(ColumnMeasurement::validated(100.0, vec![10.0, -1.0]).is_err());
        assert!(ColumnMeasurement::validated(100.0, vec![f64::INFINITY]).is_err());
        assert!(ColumnMeasurement::validated(f64::NAN, vec![]).is_err());
        assert!(ColumnMeasurement::validated(-5.0, vec![10.0]).is_ok());
    }

    #[test]
    fn test_display_span_clamps() {
        let config = SpanConfig::default();
        assert_eq!(config.display_span(-1), 1);
        assert_eq!(config.display_span(0), 1);
        assert_eq!(config.display_span(4), 4);

        let zero = SpanConfig {
            min_display_span: 0,
            ..SpanConfig::default()
        };
        assert_eq!(zero.display_span(-1), 0);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: SpanConfig = serde_json::from_str(r#"{"minDisplaySpan": 2}"#).unwrap_or_default();
        assert_eq!(config.reserved_columns, 1);
        assert_eq!(config.min_display_span, 2);
    }
}
