//! File-backed item repository
//!
//! Implements the `ItemRepository` port trait with a single CSV file.
//! Saves rewrite the whole file; loads read the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::core::error::{Error, Result};
use crate::core::models::Item;
use crate::core::ports::ItemRepository;

use super::{DEFAULT_FILE, format_items, parse_items};

/// Item repository backed by one CSV file
#[derive(Debug, Clone)]
pub struct CsvItemRepository {
    path: PathBuf,
}

impl CsvItemRepository {
    /// Create a repository for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CsvItemRepository {
    fn default() -> Self {
        Self::new(DEFAULT_FILE)
    }
}

impl ItemRepository for CsvItemRepository {
    fn save(&self, items: &[Item]) -> Result<()> {
        fs::write(&self.path, format_items(items))?;
        info!("saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Item>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.clone()));
            },
            Err(e) => return Err(e.into()),
        };
        let items = parse_items(&content)?;
        info!("loaded {} item(s) from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
