//! CSV writer for shopping lists

use std::fmt::Write;

use log::warn;

use crate::core::models::Item;

use super::HEADER;

/// Encode `items` as file contents, header first
///
/// Fields are written as-is. A name or category containing a comma will
/// not survive a reload; such rows are logged as a warning.
#[must_use]
pub fn format_items(items: &[Item]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for item in items {
        if [item.name(), item.category()].iter().any(|f| f.contains([',', '\n', '\r'])) {
            warn!("item {:?} contains a separator and will not reload intact", item.name());
        }
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            item.name(),
            item.category(),
            item.unit_price(),
            item.quantity(),
            item.purchased()
        );
    }

    out
}
