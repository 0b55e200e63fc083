//! Core domain logic for spesa
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, NewItem, Summary)
//! - `services/` - The in-memory item store
//! - `ports/` - Trait definitions for persistence and console I/O
//! - `error` - The crate-wide error type

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
