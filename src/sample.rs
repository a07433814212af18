//! Built-in demo data: five customers grouped by last order date.

use crate::types::CustomerRow;

const CUSTOMERS: [(&str, &str, &str); 5] = [
    ("3411", "Mae Jemison", "May 31, 2023"),
    ("2562", "Ellen Ochoa", "May 31, 2023"),
    ("4102", "Colm Dillane", "May 31, 2023"),
    ("2564", "Al Chemist", "April 4, 2023"),
    ("2563", "Larry June", "March 19, 2023"),
];

/// Prefix of the subheader row ids in the demo table.
pub const GROUP_ID_PREFIX: &str = "order";

/// The demo customer list, in display order.
pub fn sample_customers() -> Vec<CustomerRow> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, date)| CustomerRow {
            id: id.to_string(),
            name: name.to_string(),
            last_order_date: date.to_string(),
            ..CustomerRow::default()
        })
        .collect()
}
