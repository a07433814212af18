//! DOM measurement of the table header.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::layout::ColumnMeasurement;

/// Snapshot the container width and the widths of the first `thead`'s `th`
/// cells, left to right.
///
/// A container without a header yields no cells, so the span degrades to
/// "nothing fits" until the table is laid out.
pub(crate) fn measure_header(container: &Element) -> Result<ColumnMeasurement, JsValue> {
    let container_width = container.get_bounding_client_rect().width();

    let mut cell_widths = Vec::new();
    if let Some(head) = container.query_selector("thead")? {
        let cells = head.query_selector_all("th")?;
        for i in 0..cells.length() {
            let Some(cell) = cells.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            cell_widths.push(cell.get_bounding_client_rect().width());
        }
    }

    Ok(ColumnMeasurement::validated(container_width, cell_widths)?)
}
