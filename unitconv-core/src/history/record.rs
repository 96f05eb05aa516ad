//! Conversion records and their line format

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::units::Category;

/// Separator between fields of a history line
pub const FIELD_SEPARATOR: &str = " | ";

/// Number of fields in a well-formed history line
pub const FIELD_COUNT: usize = 6;

/// Timestamp layout, local time to the second
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers for on-screen tables
pub const DISPLAY_HEADERS: [&str; FIELD_COUNT] =
    ["Timestamp", "Category", "From", "To", "Input Value", "Result"];

/// Header row for CSV exports
pub const CSV_HEADERS: [&str; FIELD_COUNT] = [
    "Timestamp",
    "Category",
    "From Unit",
    "To Unit",
    "Input Value",
    "Result",
];

/// One logged conversion.
///
/// Fields are kept as the text that is written to (or was read from) the
/// history file, so a record read back renders exactly as it was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: String,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub input_value: String,
    pub result: String,
}

impl ConversionRecord {
    /// Build a record with an explicit timestamp
    pub fn new(
        timestamp: impl Into<String>,
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: f64,
        result: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            category: category.name().to_string(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            input_value: format_input_value(value),
            result: format_result(result),
        }
    }

    /// Build a record stamped with the current local time
    pub fn now(
        category: Category,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: f64,
        result: f64,
    ) -> Self {
        Self::new(current_timestamp(), category, from_unit, to_unit, value, result)
    }

    /// Fields in file order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.timestamp.as_str(),
            self.category.as_str(),
            self.from_unit.as_str(),
            self.to_unit.as_str(),
            self.input_value.as_str(),
            self.result.as_str(),
        ]
    }

    /// Serialize as a history line, without the trailing newline
    pub fn to_line(&self) -> String {
        self.fields().join(FIELD_SEPARATOR)
    }

    /// Parse a history line. Returns `None` unless the line holds exactly
    /// six fields once surrounding whitespace is removed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        let [timestamp, category, from_unit, to_unit, input_value, result] = parts.as_slice()
        else {
            return None;
        };

        Some(Self {
            timestamp: timestamp.to_string(),
            category: category.to_string(),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            input_value: input_value.to_string(),
            result: result.to_string(),
        })
    }

    /// Case-insensitive category comparison
    pub fn is_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Results are always shown with four decimals
pub fn format_result(value: f64) -> String {
    format!("{:.4}", value)
}

/// Shortest float text that reads back to the same value.
///
/// Whole numbers keep one decimal (`5` -> `5.0`). Magnitudes below `1e-4`
/// or from `1e16` up switch to exponent form with a signed, two-digit
/// minimum exponent (`1e-05`, `1.5e+16`).
pub fn format_input_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
