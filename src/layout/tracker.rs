//! Resize-driven recomputation of the subheader span.

use super::{ColumnMeasurement, SpanConfig};

/// Remembers the last span so a burst of resize notifications only reports
/// actual changes.
#[derive(Debug, Clone, Default)]
pub struct SpanTracker {
    config: SpanConfig,
    current: Option<i32>,
}

impl SpanTracker {
    pub fn new(config: SpanConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &SpanConfig {
        &self.config
    }

    /// Last computed raw span, `None` before the first measurement.
    pub fn current(&self) -> Option<i32> {
        self.current
    }

    /// Last span clamped for display; the configured minimum before the
    /// first measurement.
    pub fn display_span(&self) -> u32 {
        self.config.display_span(self.current.unwrap_or(0))
    }

    /// Recompute from a fresh measurement.
    ///
    /// Returns the new raw span when it differs from the previous one.
    pub fn observe(&mut self, measurement: &ColumnMeasurement) -> Option<i32> {
        let span = self.config.span(measurement);
        if self.current == Some(span) {
            return None;
        }
        tracing::debug!(
            previous = ?self.current,
            new_span = span,
            container_width = measurement.container_width,
            cells = measurement.cell_widths.len(),
            "subheader span changed"
        );
        self.current = Some(span);
        Some(span)
    }

    /// Forget the last span so the next measurement is always reported.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
