//! Item store - the in-memory shopping list
//!
//! Holds items in insertion order and owns every query and mutation.
//! Positions exposed to callers are 1-based; the first item is position 1.

use log::debug;

use crate::core::error::{Error, Result};
use crate::core::models::{Item, NewItem, Summary};

/// Ordered collection of shopping list items
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Validate and append a new, unpurchased item
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] and leaves the store untouched when any
    /// field is invalid.
    pub fn add(&mut self, draft: NewItem) -> Result<&Item> {
        let item = Item::new(draft)?;
        debug!("adding item {:?} at position {}", item.name(), self.items.len() + 1);
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Iterate over `(position, item)` pairs in insertion order
    pub fn list(&self) -> impl Iterator<Item = (usize, &Item)> + Clone {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// Remove and return the item at a 1-based position
    ///
    /// Later items shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] when `position` is outside `1..=len`.
    pub fn remove_at(&mut self, position: i64) -> Result<Item> {
        let index = self.index_of(position)?;
        let item = self.items.remove(index);
        debug!("removed item {:?} from position {position}", item.name());
        Ok(item)
    }

    /// Flip the purchased flag of the item at a 1-based position
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] when `position` is outside `1..=len`.
    pub fn toggle_purchased(&mut self, position: i64) -> Result<&Item> {
        let index = self.index_of(position)?;
        let item = &mut self.items[index];
        let purchased = item.toggle_purchased();
        debug!("item {:?} purchased = {purchased}", item.name());
        Ok(item)
    }

    /// Items whose name or category contains `query`, ignoring case
    ///
    /// An empty query matches every item. Positions are those of the full
    /// list, not of the result.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = (usize, &'a Item)> + use<'a> {
        let needle = query.to_lowercase();
        self.list().filter(move |(_, item)| item.matches(&needle))
    }

    /// Aggregate counts and values
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_items(&self.items)
    }

    /// Remove every item, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        debug!("cleared {removed} item(s)");
        removed
    }

    /// Replace the whole collection, returning the new length
    pub fn replace(&mut self, items: Vec<Item>) -> usize {
        debug!("replacing {} item(s) with {}", self.items.len(), items.len());
        self.items = items;
        self.items.len()
    }

    fn index_of(&self, position: i64) -> Result<usize> {
        let len = self.items.len();
        usize::try_from(position)
            .ok()
            .filter(|p| (1..=len).contains(p))
            .map(|p| p - 1)
            .ok_or(Error::Index { position, len })
    }
}

impl From<Vec<Item>> for ItemStore {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}
