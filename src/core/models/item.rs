//! Item model
//!
//! An item is one entry of the shopping list. Items are only ever built
//! through [`Item::new`], which enforces the field invariants, so every
//! `Item` in memory has a non-empty name and category, a positive finite
//! unit price and a positive quantity.

use serde::Serialize;

use crate::core::error::{Error, Result};

/// User-supplied fields for an item that has not been validated yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Item name (e.g., "Pane")
    pub name: String,

    /// Category used for grouping and search (e.g., "Alimentari")
    pub category: String,

    /// Price of a single unit
    pub unit_price: f64,

    /// Number of units; signed so that non-positive input can be rejected
    pub quantity: i64,
}

impl NewItem {
    /// Bundle raw fields into a draft item
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }
}

/// A validated shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    category: String,
    unit_price: f64,
    quantity: u32,
    purchased: bool,
}

impl Item {
    /// Validate a draft and build an item that is not yet purchased
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the name or category is empty,
    /// or when the price or quantity is not strictly positive.
    pub fn new(draft: NewItem) -> Result<Self> {
        if draft.name.is_empty() {
            return Err(Error::Validation("il nome non può essere vuoto".to_string()));
        }
        if draft.category.is_empty() {
            return Err(Error::Validation("la categoria non può essere vuota".to_string()));
        }
        if !draft.unit_price.is_finite() || draft.unit_price <= 0.0 {
            return Err(Error::Validation(format!(
                "il prezzo deve essere positivo (ricevuto {})",
                draft.unit_price
            )));
        }
        let quantity = u32::try_from(draft.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "la quantità deve essere un intero positivo (ricevuto {})",
                    draft.quantity
                ))
            })?;

        Ok(Self {
            name: draft.name,
            category: draft.category,
            unit_price: draft.unit_price,
            quantity,
            purchased: false,
        })
    }

    /// Set the purchased flag while restoring a persisted item
    #[must_use]
    pub(crate) fn with_purchased(mut self, purchased: bool) -> Self {
        self.purchased = purchased;
        self
    }

    /// Item name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Price of a single unit
    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Number of units
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the item has been bought already
    #[must_use]
    pub const fn purchased(&self) -> bool {
        self.purchased
    }

    /// Unit price times quantity, computed on demand
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Case-insensitive substring match against name or category
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    /// Flip the purchased flag, returning the new value
    pub(crate) fn toggle_purchased(&mut self) -> bool {
        self.purchased = !self.purchased;
        self.purchased
    }
}
