//! # CsvTable - Flat-file codec for the air-quality dataset
//!
//! The whole dataset lives in one comma-delimited text file: a fixed header
//! line followed by one row per city.
//!
//! ## File layout
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │ HEADER  Country,City,AQI Value,AQI Category,...,PM2.5 AQI Category │
//! ├────────────────────────────────────────────────────────────────────┤
//! │ ROW     country,city,v,cat,v,cat,v,cat,v,cat,v,cat                 │
//! │         (12 fields, values are digits or N/A)                      │
//! │ ... one row per city, file order = load order ...                  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reading is line oriented: [`TableReader`] yields a [`RowOutcome`] per
//! content line, so the caller decides whether a bad row is skipped or fatal.
//! Writing has two paths in [`TableWriter`]: a single-row append for inserts,
//! and a full rewrite (temp file, fsync, rename) for everything else.
//!
//! ## Example
//!
//! ```rust,no_run
//! use csvtable::{RowOutcome, TableReader};
//!
//! let reader = TableReader::open("data/global-air-pollution-dataset.csv").unwrap();
//! for item in reader {
//!     let (line_no, outcome) = item.unwrap();
//!     if let RowOutcome::Row(row) = outcome {
//!         println!("{line_no}: {} / {}", row.country, row.city);
//!     }
//! }
//! ```

mod format;
mod reader;
mod writer;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use format::{header_line, parse_line, serialize_row, Row, COLUMN_COUNT, DELIMITER, HEADER};
pub use reader::{classify_line, RowOutcome, TableReader};
pub use writer::TableWriter;

/// Errors that can occur while opening, reading or writing the table file.
#[derive(Debug, Error)]
pub enum TableError {
    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The table file does not exist.
    #[error("table file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file has no header line (it is empty).
    #[error("table file has no header line")]
    MissingHeader,
}

#[cfg(test)]
mod tests;
