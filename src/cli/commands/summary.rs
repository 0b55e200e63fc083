//! Summary command - print the totals of the saved list

use spesa::adapters::csv::CsvItemRepository;
use spesa::config::Config;
use spesa::core::ports::ItemRepository;
use spesa::output::{OutputMode, render_summary};
use spesa::Summary;

/// Load the list file and print its totals panel
pub fn summary(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let items = CsvItemRepository::new(&config.storage.file).load()?;
    let summary = Summary::from_items(&items);
    println!("{}", render_summary(&summary, mode, &config.display.currency)?);
    Ok(())
}
