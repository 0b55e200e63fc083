//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `csv/` - Flat comma-separated file persistence of the list
//! - `console/` - Line-based terminal over any `BufRead` + `Write` pair

pub mod console;
pub mod csv;
