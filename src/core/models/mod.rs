//! Domain models for spesa
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - One shopping list entry
//! - [`NewItem`] - User-supplied fields for an item not yet validated
//! - [`Summary`] - Aggregate counts and values over a list

mod item;
mod summary;

pub use item::{Item, NewItem};
pub use summary::Summary;
