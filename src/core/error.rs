//! Error types shared by the store, the persistence adapter and the shell
//!
//! Every variant is recoverable: the command loop reports it and returns
//! to the menu.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by spesa operations
#[derive(Debug, Error)]
pub enum Error {
    /// User-supplied item data failed validation
    #[error("dati non validi: {0}")]
    Validation(String),

    /// A 1-based position was outside `1..=len`
    #[error("posizione {position} non valida (articoli in lista: {len})")]
    Index {
        /// Position requested by the user
        position: i64,
        /// Number of items at the time of the request
        len: usize,
    },

    /// The persisted list does not exist
    #[error("file non trovato: {}", .0.display())]
    NotFound(PathBuf),

    /// A persisted row could not be decoded
    #[error("riga {line}: {reason}")]
    Parse {
        /// 1-based line number in the file (the header is line 1)
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Text was entered where a number was expected
    #[error("input non valido: {0:?} non è un numero")]
    InvalidInput(String),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
