//! Conversion history log
//!
//! The history is a UTF-8 text file with one [`ConversionRecord`] per line,
//! fields separated by `" | "`. It is only ever appended to, read front to
//! back, or truncated as a whole. There is no locking: a single interactive
//! process is assumed.
//!
//! # Example
//!
//! ```rust,no_run
//! use unitconv_core::history::{HistoryLog, HistoryQuery};
//! use unitconv_core::history::ConversionRecord;
//! use unitconv_core::units::Category;
//!
//! # fn main() -> unitconv_core::error::Result<()> {
//! let log = HistoryLog::new("conversion_history.txt");
//! log.append(&ConversionRecord::now(Category::Weight, "kilograms", "pounds", 1.0, 2.20462))?;
//!
//! let page = log.query(&HistoryQuery::all().with_limit(10))?;
//! for record in &page.records {
//!     println!("{}", record.to_line());
//! }
//! # Ok(())
//! # }
//! ```

mod export;
mod query;
mod record;

pub use query::{HistoryPage, HistoryQuery};
pub use record::{
    CSV_HEADERS, ConversionRecord, DISPLAY_HEADERS, FIELD_COUNT, FIELD_SEPARATOR,
    TIMESTAMP_FORMAT, current_timestamp, format_input_value, format_result,
};

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Lines, Write};
use std::path::{Path, PathBuf};

use crate::config::HistoryConfig;
use crate::error::{ConvertError, Result};

/// Default history file, relative to the working directory
pub const DEFAULT_HISTORY_FILE: &str = "conversion_history.txt";

/// Handle on a history file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Use the history file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the history file named in configuration
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the history file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the file exists and is non-empty
    pub fn has_entries(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one record, creating the file if needed
    pub fn append(&self, record: &ConversionRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        tracing::debug!(path = %self.path.display(), category = %record.category, "Appended conversion record");
        Ok(())
    }

    /// Stream well-formed records in file order.
    ///
    /// Each call reopens the file, so the scan can be restarted at will.
    /// Malformed lines are skipped.
    pub fn records(&self) -> Result<Records<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(Records::new(BufReader::new(file)))
    }

    /// Filter, order and limit the history.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyHistory`] if the file is missing or empty.
    pub fn query(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        if !self.has_entries()? {
            return Err(ConvertError::EmptyHistory);
        }
        let page = query.apply(self.records()?)?;
        tracing::debug!(
            path = %self.path.display(),
            matched = page.len(),
            truncated = page.truncated,
            "Queried history"
        );
        Ok(page)
    }

    /// Truncate the history to zero length. The file itself is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingHistory`] if the file does not exist.
    pub fn clear(&self) -> Result<()> {
        if !self.exists() {
            return Err(ConvertError::MissingHistory);
        }
        File::create(&self.path)?;
        tracing::info!(path = %self.path.display(), "Cleared conversion history");
        Ok(())
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

/// Lazy sequence of parsed history records
pub struct Records<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> Records<R> {
    /// Parse records from any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<ConversionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            match ConversionRecord::parse_line(&line) {
                Some(record) => return Some(Ok(record)),
                None => {
                    if !line.trim().is_empty() {
                        tracing::debug!(line = self.line_number, "Skipping malformed history line");
                    }
                }
            }
        }
    }
}
