//! CSV parser for persisted shopping lists
//!
//! The first line is always treated as the header and skipped without
//! being inspected. Every other line, blank ones included, must hold
//! exactly [`FIELD_COUNT`] comma-separated fields; fields are not unquoted.

use crate::core::error::{Error, Result};
use crate::core::models::{Item, NewItem};

use super::FIELD_COUNT;

/// Decode every data row of `content`
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first row with the wrong number of
/// fields, an unparsable number or flag, or values an item cannot hold.
pub fn parse_items(content: &str) -> Result<Vec<Item>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| parse_row(index + 1, line))
        .collect()
}

fn parse_row(line_no: usize, line: &str) -> Result<Item> {
    let parse_error = |reason: String| Error::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(',').collect();
    let [name, category, price, quantity, purchased] = fields.as_slice() else {
        return Err(parse_error(format!(
            "attesi {FIELD_COUNT} campi, trovati {}",
            fields.len()
        )));
    };

    let unit_price: f64 = price
        .trim()
        .parse()
        .map_err(|_| parse_error(format!("prezzo non valido: {price:?}")))?;
    let quantity: i64 = quantity
        .trim()
        .parse()
        .map_err(|_| parse_error(format!("quantità non valida: {quantity:?}")))?;
    let purchased: bool = purchased
        .trim()
        .parse()
        .map_err(|_| parse_error(format!("valore acquistato non valido: {purchased:?}")))?;

    let item = Item::new(NewItem::new(*name, *category, unit_price, quantity))
        .map_err(|e| parse_error(e.to_string()))?;
    Ok(item.with_purchased(purchased))
}
