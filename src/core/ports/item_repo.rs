//! Item repository port
//!
//! Defines the interface for persisting a whole shopping list.

use std::path::Path;

use crate::core::error::Result;
use crate::core::models::Item;

/// Durable storage for a shopping list
///
/// Both operations work on the full list: a save replaces whatever was
/// stored before and a load returns everything that was stored.
pub trait ItemRepository {
    /// Persist `items` in order, replacing any previous contents
    fn save(&self, items: &[Item]) -> Result<()>;

    /// Read back every stored item in order
    ///
    /// Fails with `NotFound` when nothing was ever saved and with `Parse`
    /// on the first malformed row; no partial result is returned.
    fn load(&self) -> Result<Vec<Item>>;

    /// Where the list is stored, for user-facing messages
    fn location(&self) -> &Path;
}
