//! Output formatting for the one-shot commands
//!
//! `spesa list` and `spesa summary` print the persisted list either as
//! human-readable text or as machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Item, Summary};
use crate::shell::render;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One numbered item in a list report
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    /// 1-based position
    pub position: usize,
    /// The item itself
    #[serde(flatten)]
    pub item: &'a Item,
    /// Unit price times quantity
    pub subtotal: f64,
}

/// Result of `spesa list`
#[derive(Debug, Serialize)]
pub struct ListReport<'a> {
    /// Items in list order
    pub items: Vec<ListEntry<'a>>,
    /// Aggregates over `items`
    pub summary: Summary,
}

impl<'a> ListReport<'a> {
    /// Build a report over `items`
    #[must_use]
    pub fn new(items: &'a [Item]) -> Self {
        Self {
            items: items
                .iter()
                .enumerate()
                .map(|(i, item)| ListEntry {
                    position: i + 1,
                    item,
                    subtotal: item.subtotal(),
                })
                .collect(),
            summary: Summary::from_items(items),
        }
    }

    /// Render the report as lines of text
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, mode: OutputMode, currency: &str) -> anyhow::Result<String> {
        match mode {
            OutputMode::Human => {
                let entries = self.items.iter().map(|e| (e.position, e.item));
                Ok(render::list(entries, &self.summary, currency).join("\n"))
            },
            OutputMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Render a summary as text or JSON
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_summary(summary: &Summary, mode: OutputMode, currency: &str) -> anyhow::Result<String> {
    match mode {
        OutputMode::Human => Ok(render::totals(summary, currency).join("\n")),
        OutputMode::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}
