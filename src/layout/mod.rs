//! Layout helpers for the grouped table header.
//!
//! This module handles:
//! - Counting the header columns that fit the visible container width
//! - Turning that count into a subheader `colspan`
//! - Tracking the span across resize notifications

mod column_span;
mod tracker;

pub use column_span::{
    count_visible_columns, count_visible_columns_with, ColumnMeasurement, SpanConfig,
    SELECTION_COLUMNS,
};
pub use tracker::SpanTracker;
