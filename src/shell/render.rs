//! Text rendering for the interactive shell
//!
//! Every function returns the lines to print so the same layout serves the
//! interactive loop, the one-shot `list`/`summary` commands and tests.

use crate::core::models::{Item, Summary};

use super::menu::MenuChoice;

/// Inner width of boxed panels, in characters
const PANEL_WIDTH: usize = 39;

/// Separator line used around the list view
pub const RULE: &str = "═══════════════════════════════════════";

/// Notice printed instead of an empty list
pub const EMPTY_LIST: &str = "La lista è vuota";

/// Format an amount with the currency symbol and two decimals
#[must_use]
pub fn money(currency: &str, amount: f64) -> String {
    format!("{currency}{amount:.2}")
}

fn checkbox(item: &Item) -> &'static str {
    if item.purchased() { "[✓]" } else { "[ ]" }
}

fn border(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(PANEL_WIDTH))
}

fn boxed(text: &str) -> String {
    format!("║ {text:<width$}║", width = PANEL_WIDTH - 1)
}

/// The numbered main menu
#[must_use]
pub fn menu() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        border('╔', '╗'),
        boxed("   GESTIONE LISTA DELLA SPESA"),
        border('╠', '╣'),
    ];
    lines.extend(MenuChoice::ALL.iter().map(|c| boxed(&format!("{}. {}", c.number(), c.label()))));
    lines.push(border('╚', '╝'));
    lines
}

/// Full two-line rendering of one item
#[must_use]
pub fn item(position: usize, item: &Item, currency: &str) -> Vec<String> {
    vec![
        format!("{} {position}. {} - {}", checkbox(item), item.name(), item.category()),
        format!(
            "       {} x {} = {}",
            money(currency, item.unit_price()),
            item.quantity(),
            money(currency, item.subtotal())
        ),
    ]
}

/// One-line rendering used before asking for a position
#[must_use]
pub fn compact_item(position: usize, item: &Item) -> String {
    format!("{} {position}. {}", checkbox(item), item.name())
}

/// The list view: every item followed by a footer with counts and total
#[must_use]
pub fn list<'a>(
    items: impl IntoIterator<Item = (usize, &'a Item)>,
    summary: &Summary,
    currency: &str,
) -> Vec<String> {
    let mut lines = vec![String::new(), RULE.to_string(), "    LISTA DELLA SPESA".to_string()];
    lines.push(RULE.to_string());
    lines.push(String::new());

    if summary.is_empty() {
        lines.push(EMPTY_LIST.to_string());
        lines.push(RULE.to_string());
        return lines;
    }

    for (position, entry) in items {
        lines.extend(item(position, entry, currency));
    }
    lines.push(RULE.to_string());
    lines.push(format!("Totale articoli: {}", summary.count));
    lines.push(format!("Non acquistati: {}", summary.unpurchased_count));
    lines.push(format!("Acquistati: {}", summary.purchased_count));
    lines.push(format!("Spesa totale: {}", money(currency, summary.total_value)));
    lines.push(RULE.to_string());
    lines
}

/// The boxed totals panel
#[must_use]
pub fn totals(summary: &Summary, currency: &str) -> Vec<String> {
    let mut lines =
        vec![String::new(), border('╔', '╗'), boxed("    CALCOLO SPESA TOTALE"), border('╠', '╣')];

    if summary.is_empty() {
        lines.push(boxed(EMPTY_LIST));
    } else {
        lines.push(boxed(&format!("Articoli totali: {}", summary.count)));
        lines.push(boxed(&format!("Non acquistati: {}", summary.unpurchased_count)));
        lines.push(boxed(&format!("Acquistati: {}", summary.purchased_count)));
        lines.push(boxed(""));
        lines.push(boxed(&format!("Spesa totale: {}", money(currency, summary.total_value))));
        lines.push(boxed(&format!(
            "Spesa acquisiti: {}",
            money(currency, summary.purchased_value)
        )));
        lines.push(boxed(&format!(
            "Spesa rimanente: {}",
            money(currency, summary.remaining_value)
        )));
    }
    lines.push(border('╚', '╝'));
    lines
}
