use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::{Group, Record, SelectionRange};

/// Check state of a group's subheader row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Every member is selected
    Selected,
    /// No member is selected
    #[default]
    Unselected,
    /// Some but not all members are selected
    Indeterminate,
}

impl SelectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Unselected => "unselected",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized the way row components take their `selected` prop:
/// `true`, `false` or `"indeterminate"`.
impl Serialize for SelectionState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Selected => serializer.serialize_bool(true),
            Self::Unselected => serializer.serialize_bool(false),
            Self::Indeterminate => serializer.serialize_str("indeterminate"),
        }
    }
}

/// The set of selected record identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSelection {
    ids: HashSet<String>,
}

impl ResourceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn select(&mut self, id: &str) {
        if !self.ids.contains(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn deselect(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Flip one identifier; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Select or deselect every record whose position falls in `range`.
    ///
    /// This covers the whole interval, so when a group's members are
    /// interleaved with other groups' records those records change too.
    /// Positions past the end of `records` are ignored.
    pub fn set_range<T: Record>(&mut self, records: &[T], range: SelectionRange, selected: bool) {
        let end = range.max().saturating_add(1).min(records.len());
        let start = range.min().min(end);
        for record in records.get(start..end).unwrap_or_default() {
            if selected {
                self.select(record.id());
            } else {
                self.deselect(record.id());
            }
        }
    }

    /// Bulk-toggle a group from its subheader checkbox: a fully selected
    /// group is cleared, anything else becomes fully selected.
    ///
    /// Goes through [`Self::set_range`] over the group's selection range, so
    /// non-members lying between interleaved members are selected as well.
    ///
    /// Returns the group's state afterwards.
    pub fn toggle_group<T: Record>(&mut self, records: &[T], group: &Group<'_, T>) -> SelectionState {
        let Some(range) = group.selection_range() else {
            return SelectionState::Unselected;
        };
        let select = self.state_of(group) != SelectionState::Selected;
        self.set_range(records, range, select);
        self.state_of(group)
    }

    pub fn select_all<T: Record>(&mut self, records: &[T]) {
        for record in records {
            self.select(record.id());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True when `records` is non-empty and every record is selected.
    pub fn all_selected<T: Record>(&self, records: &[T]) -> bool {
        !records.is_empty() && records.iter().all(|r| self.contains(r.id()))
    }

    /// Check state of `group`'s subheader under this selection.
    pub fn state_of<T: Record>(&self, group: &Group<'_, T>) -> SelectionState {
        crate::selection::selection_state(group, &self.ids)
    }
}

impl<S: Into<String>> FromIterator<S> for ResourceSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HashSet<String>> for ResourceSelection {
    fn from(ids: HashSet<String>) -> Self {
        Self { ids }
    }
}
