//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing spesa components.

use std::cell::RefCell;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use spesa::adapters::console::StdConsole;
use spesa::core::ports::ItemRepository;
use spesa::shell::{Shell, ShellOptions};
use spesa::{Error, Item, ItemStore, NewItem, Result};

/// Console fed from a fixed script, capturing everything written
pub type ScriptedConsole = StdConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Build a console that will answer prompts with the lines of `script`
pub fn scripted(script: &str) -> ScriptedConsole {
    StdConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// A store holding Pane (1.50 x 2) and Latte (1.20 x 1)
pub fn sample_store() -> ItemStore {
    let mut store = ItemStore::new();
    store.add(NewItem::new("Pane", "Alimentari", 1.5, 2)).unwrap();
    store.add(NewItem::new("Latte", "Alimentari", 1.2, 1)).unwrap();
    store
}

/// Names of the items in store order
pub fn names(store: &ItemStore) -> Vec<String> {
    store.items().iter().map(|i| i.name().to_string()).collect()
}

/// Float comparison with a tolerance suited to money amounts
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Run a full shell session over `script`, returning the final list and output
pub fn run_session<P: ItemRepository>(
    store: ItemStore,
    repo: P,
    script: &str,
) -> (ItemStore, String) {
    run_session_with(store, repo, ShellOptions::default(), script)
}

/// Like [`run_session`] with explicit shell options
pub fn run_session_with<P: ItemRepository>(
    store: ItemStore,
    repo: P,
    options: ShellOptions,
    script: &str,
) -> (ItemStore, String) {
    let mut shell = Shell::with_store(store, scripted(script), repo, options);
    shell.run().expect("session should end cleanly");
    let (store, console) = shell.into_parts();
    (store, String::from_utf8(console.into_output()).unwrap())
}

/// In-memory repository recording what was saved
pub struct MockItemRepository {
    saved: RefCell<Option<Vec<Item>>>,
    fail_saves: bool,
    path: PathBuf,
}

impl MockItemRepository {
    /// Repository with nothing saved yet
    pub fn new() -> Self {
        Self {
            saved: RefCell::new(None),
            fail_saves: false,
            path: PathBuf::from("mock.csv"),
        }
    }

    /// Repository that already holds `items`
    pub fn with_items(items: Vec<Item>) -> Self {
        let repo = Self::new();
        *repo.saved.borrow_mut() = Some(items);
        repo
    }

    /// Repository whose saves always fail
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// Items from the last successful save, if any
    pub fn saved(&self) -> Option<Vec<Item>> {
        self.saved.borrow().clone()
    }
}

impl ItemRepository for &MockItemRepository {
    fn save(&self, items: &[Item]) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only")));
        }
        *self.saved.borrow_mut() = Some(items.to_vec());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Item>> {
        self.saved.borrow().clone().ok_or_else(|| Error::NotFound(self.path.clone()))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
