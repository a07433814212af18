//! Render-ready view of the groups: everything a table needs per subheader row.

use serde::Serialize;

use crate::types::{Group, Record, ResourceSelection, SelectionRange, SelectionState};

/// One subheader row: the group plus its DOM id, selection range and check
/// state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary<'g, 'a, T> {
    pub id: String,
    #[serde(flatten)]
    pub group: &'g Group<'a, T>,
    pub selection_range: Option<SelectionRange>,
    pub selected: SelectionState,
}

/// Summarize every group under the current selection.
pub fn summarize<'g, 'a, T: Record>(
    groups: &'g [Group<'a, T>],
    id_prefix: &str,
    selection: &ResourceSelection,
) -> Vec<GroupSummary<'g, 'a, T>> {
    groups
        .iter()
        .map(|group| GroupSummary {
            id: group.element_id(id_prefix),
            group,
            selection_range: group.selection_range(),
            selected: selection.state_of(group),
        })
        .collect()
}
