//! List command - print the saved list

use spesa::adapters::csv::CsvItemRepository;
use spesa::config::Config;
use spesa::core::ports::ItemRepository;
use spesa::output::{ListReport, OutputMode};

/// Load the list file and print every item with a summary footer
pub fn list(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let items = CsvItemRepository::new(&config.storage.file).load()?;
    let report = ListReport::new(&items);
    println!("{}", report.render(mode, &config.display.currency)?);
    Ok(())
}
