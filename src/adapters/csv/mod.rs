//! CSV-backed item repository
//!
//! Implements `ItemRepository` using a flat comma-separated file.
//!
//! - [`parser`] - Decode file contents into items
//! - [`writer`] - Encode items as file contents
//! - [`repository`] - `ItemRepository` implementation

pub mod parser;
pub mod repository;
pub mod writer;

pub use parser::parse_items;
pub use repository::CsvItemRepository;
pub use writer::format_items;

/// First line of every persisted list
pub const HEADER: &str = "Nome,Categoria,Prezzo,Quantita,Acquistato";

/// Number of fields in a data row
pub const FIELD_COUNT: usize = 5;

/// Default file name, relative to the working directory
pub const DEFAULT_FILE: &str = "spesa.csv";
