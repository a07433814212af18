use serde::Serialize;

use super::Record;

/// A record annotated with its 0-based position in the flat input list.
///
/// Serializes as the record's own fields followed by `position`, so the
/// computed position replaces any `position` field the record carries.
#[derive(Debug, PartialEq, Serialize)]
pub struct Member<'a, T> {
    #[serde(flatten)]
    pub record: &'a T,
    pub position: usize,
}

// Manual impls: a borrowed member is copyable whatever `T` is.
impl<T> Clone for Member<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<'_, T> {}

/// Records sharing a grouping key, in their original relative order.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group<'a, T> {
    /// The grouping key value (e.g. a date label)
    pub key: String,
    /// Position of the first member in the flat list
    pub first_position: usize,
    pub members: Vec<Member<'a, T>>,
}

impl<'a, T> Group<'a, T> {
    /// Start a group whose first member sits at `position`.
    pub(crate) fn starting_at(key: String, position: usize, record: &'a T) -> Self {
        Self {
            key,
            first_position: position,
            members: vec![Member { position, record }],
        }
    }

    pub(crate) fn push(&mut self, position: usize, record: &'a T) {
        debug_assert!(
            self.members.last().map_or(true, |m| m.position < position),
            "members must be appended in list order"
        );
        self.members.push(Member { position, record });
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate the member records without their positions.
    pub fn records(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.members.iter().map(|m| m.record)
    }

    /// Position interval covered by this group, used for bulk selection.
    ///
    /// `None` only for a group with no members, which the grouping engine
    /// never produces.
    pub fn selection_range(&self) -> Option<SelectionRange> {
        let first = self.members.first()?;
        let last = self.members.last()?;
        Some(SelectionRange(first.position, last.position))
    }

    /// DOM id for the group's subheader row: `prefix` and the key joined
    /// with dashes in place of spaces.
    ///
    /// ```
    /// # use tablegroup::grouping::group;
    /// # use tablegroup::sample::sample_customers;
    /// let customers = sample_customers();
    /// let groups = group(&customers, |c| c.last_order_date.clone());
    /// assert_eq!(groups[0].element_id("order"), "order-May-31,-2023");
    /// ```
    pub fn element_id(&self, prefix: &str) -> String {
        let mut id = String::with_capacity(prefix.len() + 1 + self.key.len());
        id.push_str(prefix);
        id.push('-');
        for (i, word) in self.key.split(' ').enumerate() {
            if i > 0 {
                id.push('-');
            }
            id.push_str(word);
        }
        id
    }
}

impl<'a, T: Record> Group<'a, T> {
    /// Identifiers of the members, in list order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.members.iter().map(|m| m.record.id())
    }
}

/// Inclusive `[min, max]` interval of original list positions.
///
/// Serializes as a two-element array, the shape table components expect for
/// a row's selection range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange(pub usize, pub usize);

impl SelectionRange {
    pub fn min(&self) -> usize {
        self.0.min(self.1)
    }

    pub fn max(&self) -> usize {
        self.0.max(self.1)
    }

    pub fn contains(&self, position: usize) -> bool {
        (self.min()..=self.max()).contains(&position)
    }

    /// Number of positions covered (never zero).
    pub fn row_count(&self) -> usize {
        self.max() - self.min() + 1
    }
}
