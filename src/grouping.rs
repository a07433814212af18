//! Single-pass grouping of a flat record list.
//!
//! Groups come out in the order their key was first seen while scanning the
//! list, not in sorted order. Members keep their original relative order and
//! carry their 0-based position in the input, so a group's selection range
//! can be derived without searching the list again.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::Group;

/// Partition `records` into groups keyed by `key_of`.
///
/// Total over any input: an empty slice yields no groups.
pub fn group<'a, T, K, F>(records: &'a [T], mut key_of: F) -> Vec<Group<'a, T>>
where
    K: Into<String>,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<Group<'a, T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (position, record) in records.iter().enumerate() {
        let key = key_of(record).into();
        match index.get(&key) {
            Some(&slot) => {
                if let Some(group) = groups.get_mut(slot) {
                    group.push(position, record);
                }
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group::starting_at(key, position, record));
            }
        }
    }

    tracing::trace!(records = records.len(), groups = groups.len(), "grouped records");
    groups
}

/// Like [`group`], but the key is borrowed from the record and only copied
/// when a new group is opened.
pub fn group_by_key<'a, T, F>(records: &'a [T], mut key_of: F) -> Vec<Group<'a, T>>
where
    F: FnMut(&'a T) -> &'a str,
{
    let mut groups: Vec<Group<'a, T>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for (position, record) in records.iter().enumerate() {
        let key = key_of(record);
        if let Some(group) = index.get(key).and_then(|&slot| groups.get_mut(slot)) {
            group.push(position, record);
        } else {
            index.insert(key, groups.len());
            groups.push(Group::starting_at(key.to_string(), position, record));
        }
    }

    tracing::trace!(records = records.len(), groups = groups.len(), "grouped records");
    groups
}

/// Group with a fallible key extractor, for records whose key may be absent.
///
/// # Errors
/// Returns the first error produced by `key_of`, in list order.
pub fn try_group_by_key<'a, T, F>(records: &'a [T], mut key_of: F) -> Result<Vec<Group<'a, T>>>
where
    F: FnMut(&'a T) -> Result<&'a str>,
{
    let keys = records.iter().map(&mut key_of).collect::<Result<Vec<&'a str>>>()?;
    let mut keys = keys.into_iter();
    // One key per record, consumed in the same order the engine scans.
    Ok(group_by_key(records, move |_| keys.next().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        day: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a", day: "mon" },
            Row { id: "b", day: "tue" },
            Row { id: "c", day: "mon" },
            Row { id: "d", day: "wed" },
            Row { id: "e", day: "tue" },
        ]
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let rows = rows();
        let groups = group(&rows, |r| r.day);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["mon", "tue", "wed"]);
    }

    #[test]
    fn test_interleaved_members_keep_positions() {
        let rows = rows();
        let groups = group(&rows, |r| r.day);
        let mon: Vec<usize> = groups[0].members.iter().map(|m| m.position).collect();
        let tue: Vec<usize> = groups[1].members.iter().map(|m| m.position).collect();
        assert_eq!(mon, [0, 2]);
        assert_eq!(tue, [1, 4]);
        assert_eq!(groups[1].first_position, 1);
        assert_eq!(groups[2].first_position, 3);
    }

    #[test]
    fn test_borrowed_and_owned_keys_agree() {
        let rows = rows();
        assert_eq!(group(&rows, |r| r.day.to_string()), group_by_key(&rows, |r| r.day));
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Row> = Vec::new();
        assert!(group(&rows, |r| r.day).is_empty());
        assert!(group_by_key(&rows, |r| r.day).is_empty());
    }

    #[test]
    fn test_try_group_stops_on_missing_key() {
        let rows = rows();
        let result = try_group_by_key(&rows, |r| {
            if r.id == "d" {
                Err("no day".into())
            } else {
                Ok(r.day)
            }
        });
        assert!(result.is_err());

        let ok = try_group_by_key(&rows, |r| Ok(r.day));
        assert!(matches!(ok, Ok(ref groups) if groups.len() == 3));
    }
}
