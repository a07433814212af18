//! Example: Group the demo customers and size the subheader for a few widths
//!
//! Run with: cargo run --example group_customers

#![allow(clippy::expect_used, clippy::indexing_slicing)]

use tablegroup::grouping::group_by_key;
use tablegroup::layout::{ColumnMeasurement, SpanTracker};
use tablegroup::sample::{sample_customers, GROUP_ID_PREFIX};
use tablegroup::{CustomerRow, ResourceSelection};

fn main() {
    let customers = sample_customers();
    let groups = group_by_key(&customers, CustomerRow::last_order_date);

    let mut selection = ResourceSelection::new();
    selection.select("3411");

    println!("Customers: {}", customers.len());
    for group in &groups {
        let range = group.selection_range().expect("groups are never empty");
        println!(
            "\n  {} ({}) rows {}..={} [{}]",
            group.key,
            group.element_id(GROUP_ID_PREFIX),
            range.min(),
            range.max(),
            selection.state_of(group)
        );
        for member in &group.members {
            let mark = if selection.contains(&member.record.id) { "x" } else { " " };
            println!("    [{}] {:>2} {}", mark, member.position, member.record.name);
        }
    }

    // Checkbox column first, then name, location, order count, amount spent
    let header = vec![48.0, 180.0, 220.0, 110.0, 120.0];
    let mut tracker = SpanTracker::default();
    println!("\nSubheader span by container width:");
    for width in [40.0, 230.0, 448.0, 500.0, 678.0, 1024.0] {
        let measurement = ColumnMeasurement::new(width, header.clone());
        match tracker.observe(&measurement) {
            Some(span) => println!("  {width:>6}px -> span {span} (colspan {})", tracker.display_span()),
            None => println!("  {width:>6}px -> unchanged"),
        }
    }
}
