//! Selection tests
//!
//! Tests for subheader check states and bulk selection through a group's
//! selection range.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::HashSet;

use tablegroup::grouping::group_by_key;
use tablegroup::sample::sample_customers;
use tablegroup::selection::{members_selection_state, selection_state};
use tablegroup::{CustomerRow, ResourceSelection, SelectionRange, SelectionState};
use test_case::test_case;

fn ids(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// TRI-STATE
// =============================================================================

#[test_case(&["3411", "2562", "4102"], SelectionState::Selected ; "all members")]
#[test_case(&["3411", "2562", "4102", "2564"], SelectionState::Selected ; "all members plus others")]
#[test_case(&["2562"], SelectionState::Indeterminate ; "one member")]
#[test_case(&["3411", "4102"], SelectionState::Indeterminate ; "two of three")]
#[test_case(&["2564", "2563"], SelectionState::Unselected ; "only other groups")]
#[test_case(&[], SelectionState::Unselected ; "nothing selected")]
fn test_first_group_state(selected: &[&str], expected: SelectionState) {
    let customers = sample_customers();
    let groups = group_by_key(&customers, CustomerRow::last_order_date);
    assert_eq!(selection_state(&groups[0], &ids(selected)), expected);
}

#[test]
fn test_two_member_groups() {
    let selected = ids(&["A", "B"]);
    assert_eq!(members_selection_state(["A", "B"], &selected), SelectionState::Selected);
    assert_eq!(members_selection_state(["C", "D"], &selected), SelectionState::Unselected);
    assert_eq!(
        members_selection_state(["A", "D"], &selected),
        SelectionState::Indeterminate
    );
}

#[test]
fn test_state_recomputed_after_change() {
    let customers = sample_customers();
    let groups = group_by_key(&customers, CustomerRow::last_order_date);
    let mut selection = ResourceSelection::new();

    assert_eq!(selection.state_of(&groups[2]), SelectionState::Unselected);
    selection.select("2563");
    assert_eq!(selection.state_of(&groups[2]), SelectionState::Selected);
    selection.deselect("2563");
    assert_eq!(selection.state_of(&groups[2]), SelectionState::Unselected);
}

#[test]
fn test_state_serializes_as_prop_value() {
    let json = serde_json::to_string(&[
        SelectionState::Selected,
        SelectionState::Unselected,
        SelectionState::Indeterminate,
    ])
    .unwrap();
    assert_eq!(json, r#"[true,false,"indeterminate"]"#);
    assert_eq!(SelectionState::Indeterminate.to_string(), "indeterminate");
}

// =============================================================================
// BULK SELECTION
// =============================================================================

#[test]
fn test_set_range_selects_group() {
    let customers = sample_customers();
    let groups = group_by_key(&customers, CustomerRow::last_order_date);
    let mut selection = ResourceSelection::new();

    let range = groups[0].selection_range().unwrap();
    selection.set_range(&customers, range, true);
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.state_of(&groups[0]), SelectionState::Selected);
    assert_eq!(selection.state_of(&groups[1]), SelectionState::Unselected);

    selection.set_range(&customers, range, false);
    assert!(selection.is_empty());
}

#[test]
fn test_set_range_past_end_is_clipped() {
    let customers = sample_customers();
    let mut selection = ResourceSelection::new();
    selection.set_range(&customers, SelectionRange(3, 99), true);
    assert_eq!(selection.len(), 2);
    selection.set_range(&customers, SelectionRange(50, 60), true);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_toggle_group_from_indeterminate() {
    let customers = sample_customers();
    let groups = group_by_key(&customers, CustomerRow::last_order_date);
    let mut selection: ResourceSelection = ["2562"].into_iter().collect();

    assert_eq!(selection.state_of(&groups[0]), SelectionState::Indeterminate);
    assert_eq!(
        selection.toggle_group(&customers, &groups[0]),
        SelectionState::Selected
    );
    assert_eq!(
        selection.toggle_group(&customers, &groups[0]),
        SelectionState::Unselected
    );
}

#[test]
fn test_toggle_and_select_all() {
    let customers = sample_customers();
    let mut selection = ResourceSelection::new();

    assert!(selection.toggle("3411"));
    assert!(selection.contains("3411"));
    assert!(!selection.toggle("3411"));
    assert!(!selection.all_selected(&customers));

    selection.select_all(&customers);
    assert!(selection.all_selected(&customers));
    assert_eq!(selection.len(), customers.len());

    selection.clear();
    assert!(selection.is_empty());
    assert!(!selection.all_selected::<CustomerRow>(&[]));
}

#[test]
fn test_selection_from_json_array() {
    let selection: ResourceSelection = serde_json::from_str(r#"["3411", "2562", "3411"]"#).unwrap();
    assert_eq!(selection.len(), 2);
    assert!(selection.contains("2562"));
}

#[test]
fn test_toggle_group_covers_interleaved_records() {
    let rows: Vec<CustomerRow> = [("a", "x"), ("b", "y"), ("c", "x")]
        .into_iter()
        .map(|(id, date)| CustomerRow {
            id: id.to_string(),
            last_order_date: date.to_string(),
            ..CustomerRow::default()
        })
        .collect();
    let groups = group_by_key(&rows, CustomerRow::last_order_date);
    let mut selection = ResourceSelection::new();

    // Range selection spans positions 0..=2, so "b" from the other group is included
    assert_eq!(selection.toggle_group(&rows, &groups[0]), SelectionState::Selected);
    assert!(selection.contains("b"));
    assert_eq!(selection.state_of(&groups[1]), SelectionState::Selected);

    assert_eq!(selection.toggle_group(&rows, &groups[0]), SelectionState::Unselected);
    assert!(selection.is_empty());
}
