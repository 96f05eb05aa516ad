//! User-facing history operations
//!
//! Each operation reports its outcome on the console and returns a plain
//! indicator. History errors are turned into messages here; only console
//! write failures are returned.

use std::io::Write;
use std::path::Path;

use crate::console::{Console, InputProvider};
use crate::error::{ConvertError, Result};
use crate::history::{DISPLAY_HEADERS, HistoryLog, HistoryQuery};
use crate::table;

/// Print the history as a table, newest first.
///
/// Returns the number of records shown.
pub fn show_history<W: Write>(out: &mut W, log: &HistoryLog, query: &HistoryQuery) -> Result<usize> {
    let page = match log.query(query) {
        Ok(page) => page,
        Err(ConvertError::EmptyHistory) => {
            writeln!(out, "No conversion history found.")?;
            return Ok(0);
        }
        Err(e) => {
            tracing::warn!(path = %log.path().display(), error = %e, "Could not read history");
            writeln!(out, "Error accessing history file: {}", e)?;
            return Ok(0);
        }
    };

    match query.limit {
        Some(limit) if page.truncated => {
            writeln!(out, "\n=== Conversion History (Latest {} Entries) ===", limit)?
        }
        _ => writeln!(out, "\n=== Conversion History ===")?,
    }
    if let Some(ref category) = query.category {
        writeln!(out, "Filtered by category: {}", category)?;
    }

    let rows = page.records.iter().map(|r| r.fields());
    write!(out, "{}", table::render(&DISPLAY_HEADERS, rows))?;
    Ok(page.len())
}

/// How a clear request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Cancelled,
    NoHistory,
    Failed,
}

/// Empty the history file, asking first when `confirm` is set.
///
/// Only "y" or "yes" (any case) confirms.
pub fn clear_history<I, W>(
    console: &mut Console<I, W>,
    log: &HistoryLog,
    confirm: bool,
) -> Result<ClearOutcome>
where
    I: InputProvider,
    W: Write,
{
    if !log.exists() {
        writeln!(console.out(), "No history file exists yet.")?;
        return Ok(ClearOutcome::NoHistory);
    }

    if confirm {
        let answer = console
            .prompt("Are you sure you want to clear the conversion history? (y/n): ")?
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if answer != "y" && answer != "yes" {
            writeln!(console.out(), "Operation cancelled.")?;
            return Ok(ClearOutcome::Cancelled);
        }
    }

    match log.clear() {
        Ok(()) => {
            writeln!(console.out(), "Conversion history cleared.")?;
            Ok(ClearOutcome::Cleared)
        }
        Err(ConvertError::MissingHistory) => {
            writeln!(console.out(), "No history file exists yet.")?;
            Ok(ClearOutcome::NoHistory)
        }
        Err(e) => {
            tracing::warn!(path = %log.path().display(), error = %e, "Could not clear history");
            writeln!(console.out(), "Error clearing history: {}", e)?;
            Ok(ClearOutcome::Failed)
        }
    }
}

/// Export the history to CSV. Returns whether the export succeeded.
pub fn export_history<W: Write>(out: &mut W, log: &HistoryLog, csv_path: &Path) -> Result<bool> {
    match log.export_csv(csv_path) {
        Ok(_) => {
            writeln!(out, "Conversion history exported to {}", csv_path.display())?;
            Ok(true)
        }
        Err(ConvertError::EmptyHistory) => {
            writeln!(out, "No conversion history found to export.")?;
            Ok(false)
        }
        Err(e) => {
            tracing::warn!(target_path = %csv_path.display(), error = %e, "Could not export history");
            writeln!(out, "Error exporting history to CSV: {}", e)?;
            Ok(false)
        }
    }
}
