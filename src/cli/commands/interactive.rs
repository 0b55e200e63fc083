//! Interactive menu session

use log::info;

use spesa::adapters::console::StdConsole;
use spesa::adapters::csv::CsvItemRepository;
use spesa::config::Config;
use spesa::shell::Shell;

/// Run the menu loop on stdin/stdout until the user exits
pub fn interactive(config: &Config) -> anyhow::Result<()> {
    info!("using list file {}", config.storage.file.display());

    let repo = CsvItemRepository::new(&config.storage.file);
    let mut shell = Shell::new(StdConsole::stdio(), repo, config.shell_options());
    shell.run()?;

    Ok(())
}
