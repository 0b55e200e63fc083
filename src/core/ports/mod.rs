//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the outside world (the persisted file, the terminal).
//!
//! Implementations live in the `adapters` module.

mod console;
mod item_repo;

pub use console::Console;
pub use item_repo::ItemRepository;
