//! Tri-state selection of group subheaders.

use std::collections::HashSet;

use crate::types::{Group, Record, SelectionState};

/// Check state of `group` given the selected identifiers.
///
/// All members selected gives [`SelectionState::Selected`], none gives
/// [`SelectionState::Unselected`], anything in between is
/// [`SelectionState::Indeterminate`]. Recompute whenever `selected` changes.
pub fn selection_state<T: Record>(group: &Group<'_, T>, selected: &HashSet<String>) -> SelectionState {
    members_selection_state(group.ids(), selected)
}

/// [`selection_state`] over bare member identifiers.
///
/// An empty member list counts as fully selected, matching an "every member
/// is selected" check.
pub fn members_selection_state<'a, I>(member_ids: I, selected: &HashSet<String>) -> SelectionState
where
    I: IntoIterator<Item = &'a str>,
{
    let mut any = false;
    let mut all = true;
    for id in member_ids {
        if selected.contains(id) {
            any = true;
        } else {
            all = false;
        }
        if any && !all {
            return SelectionState::Indeterminate;
        }
    }

    if all {
        SelectionState::Selected
    } else {
        SelectionState::Unselected
    }
}
