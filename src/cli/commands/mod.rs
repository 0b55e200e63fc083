//! Command implementations

mod interactive;
mod list;
mod summary;

pub use interactive::interactive;
pub use list::list;
pub use summary::summary;
