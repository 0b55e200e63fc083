//! spesa - An interactive command-line shopping list
//!
//! This library provides the item store, CSV persistence and the menu-driven
//! command loop used by the `spesa` binary.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod shell;

pub use crate::core::error::{Error, Result};
pub use crate::core::models::{Item, NewItem, Summary};
pub use crate::core::services::ItemStore;
