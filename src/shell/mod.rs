//! Interactive command loop
//!
//! The shell owns the item store and talks to the user through a
//! [`Console`]. Each turn shows the menu, reads one selection and runs the
//! matching handler to completion.
//!
//! Every domain error (bad item data, bad position, missing or malformed
//! file, non-numeric input) is reported and the loop goes on. Only the exit
//! command, the end of input, or a failing console end the loop.
//!
//! - [`menu`] - Menu entries and their numbers
//! - [`render`] - Text layout of menus, items and totals
//! - `handlers` - One method per menu entry

mod handlers;
pub mod menu;
pub mod render;

use log::debug;

use crate::core::error::{Error, Result};
use crate::core::ports::{Console, ItemRepository};
use crate::core::services::ItemStore;

pub use menu::MenuChoice;

/// What the loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again
    Continue,
    /// Leave the loop
    Exit,
}

/// Presentation and persistence settings for a session
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Symbol printed in front of amounts
    pub currency: String,
    /// Overwrite the file with an empty list when the list is cleared
    pub reset_file_on_clear: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            currency: "€".to_string(),
            reset_file_on_clear: true,
        }
    }
}

/// The interactive shopping list session
#[derive(Debug)]
pub struct Shell<C, P> {
    store: ItemStore,
    console: C,
    repo: P,
    options: ShellOptions,
}

impl<C: Console, P: ItemRepository> Shell<C, P> {
    /// Start a session with an empty list
    pub fn new(console: C, repo: P, options: ShellOptions) -> Self {
        Self::with_store(ItemStore::new(), console, repo, options)
    }

    /// Start a session on an existing list
    pub const fn with_store(store: ItemStore, console: C, repo: P, options: ShellOptions) -> Self {
        Self {
            store,
            console,
            repo,
            options,
        }
    }

    /// The list as it currently stands
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    /// End the session, handing back the list and the console
    pub fn into_parts(self) -> (ItemStore, C) {
        (self.store, self.console)
    }

    /// Run until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only when the console itself fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {},
                Ok(Flow::Exit) => return Ok(()),
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    debug!("recovered from {e:?}");
                    self.fail(&e.to_string())?;
                },
            }
        }
    }

    /// Show the menu, read one selection and dispatch it
    ///
    /// # Errors
    ///
    /// Propagates the handler's error; the caller decides whether it is fatal.
    pub fn step(&mut self) -> Result<Flow> {
        for line in render::menu() {
            self.console.write_line(&line)?;
        }
        let Some(number) = self.console.prompt_parsed::<i64>("Scegli (1-10): ")? else {
            debug!("input closed, leaving");
            return Ok(Flow::Exit);
        };

        match MenuChoice::from_number(number) {
            Some(choice) => self.dispatch(choice),
            None => {
                self.fail("Scelta non valida!")?;
                Ok(Flow::Continue)
            },
        }
    }

    /// Run the handler for one menu entry
    ///
    /// # Errors
    ///
    /// Returns validation, position and input errors for the caller to report.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!("dispatching {choice:?}");
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::List => self.list(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Search => self.search(),
            MenuChoice::TogglePurchased => self.toggle_purchased(),
            MenuChoice::Totals => self.totals(),
            MenuChoice::Save => self.save(),
            MenuChoice::Load => self.load(),
            MenuChoice::Clear => self.clear(),
            MenuChoice::Exit => self.exit(),
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)
    }

    fn say_all(&mut self, lines: &[String]) -> Result<()> {
        lines.iter().try_for_each(|line| self.console.write_line(line))
    }

    fn ok(&mut self, text: &str) -> Result<()> {
        self.say(&format!("✓ {text}"))
    }

    fn fail(&mut self, text: &str) -> Result<()> {
        self.say(&format!("❌ {text}"))
    }

    fn cancel(&mut self, text: &str) -> Result<()> {
        self.say(&format!("✗ {text}"))
    }
}
