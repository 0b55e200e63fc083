//! Business services
//!
//! - [`ItemStore`] - Ordered in-memory shopping list

mod store;

pub use store::ItemStore;
