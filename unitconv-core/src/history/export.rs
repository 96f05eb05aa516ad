//! CSV export of the history file

use std::path::Path;

use super::HistoryLog;
use super::record::CSV_HEADERS;
use crate::error::{ConvertError, Result};

impl HistoryLog {
    /// Write every well-formed record to `csv_path`, header row first.
    ///
    /// Returns the number of data rows written. No filter or limit applies;
    /// rows keep file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyHistory`] without touching `csv_path` if
    /// the history file is missing or empty.
    pub fn export_csv(&self, csv_path: impl AsRef<Path>) -> Result<usize> {
        let csv_path = csv_path.as_ref();
        if !self.has_entries()? {
            return Err(ConvertError::EmptyHistory);
        }

        let records = self.records()?;
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(csv_path)?;

        writer.write_record(CSV_HEADERS)?;
        let mut rows = 0;
        for record in records {
            writer.write_record(record?.fields())?;
            rows += 1;
        }
        writer.flush()?;

        tracing::info!(
            source = %self.path().display(),
            destination = %csv_path.display(),
            rows,
            "Exported conversion history"
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ConversionRecord;
    use crate::units::Category;
    use tempfile::TempDir;

    fn read_csv(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.txt"));
        log.append(&ConversionRecord::new(
            "2024-05-01 12:00:00",
            Category::Volume,
            "cubic meters",
            "liters",
            1.0,
            1000.0,
        ))
        .unwrap();
        log.append(&ConversionRecord::new(
            "2024-05-01 12:01:00",
            Category::Temperature,
            "Celsius",
            "Kelvin",
            0.0,
            273.15,
        ))
        .unwrap();

        let csv_path = dir.path().join("out.csv");
        assert_eq!(log.export_csv(&csv_path).unwrap(), 2);

        let rows = read_csv(&csv_path);
        assert_eq!(
            rows[0],
            vec!["Timestamp", "Category", "From Unit", "To Unit", "Input Value", "Result"]
        );
        assert_eq!(
            rows[1],
            vec!["2024-05-01 12:00:00", "Volume", "cubic meters", "liters", "1.0", "1000.0000"]
        );
        assert_eq!(rows[2][5], "273.1500");

        let raw = std::fs::read_to_string(&csv_path).unwrap();
        assert!(raw.starts_with("Timestamp,Category,From Unit,To Unit,Input Value,Result\r\n"));
    }

    #[test]
    fn test_export_quotes_special_characters() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.txt"));
        std::fs::write(
            log.path(),
            "2024-05-01 12:00:00 | Length | feet, US | meters | 1.0 | 0.3048\n",
        )
        .unwrap();

        let csv_path = dir.path().join("out.csv");
        log.export_csv(&csv_path).unwrap();

        let raw = std::fs::read_to_string(&csv_path).unwrap();
        assert!(raw.contains("\"feet, US\""));
        assert_eq!(read_csv(&csv_path)[1][2], "feet, US");
    }

    #[test]
    fn test_export_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.txt"));
        std::fs::write(
            log.path(),
            "broken | line\n2024-05-01 12:00:00 | Weight | grams | ounces | 100.0 | 3.5274\n",
        )
        .unwrap();

        let csv_path = dir.path().join("out.csv");
        assert_eq!(log.export_csv(&csv_path).unwrap(), 1);
        assert_eq!(read_csv(&csv_path).len(), 2);
    }

    #[test]
    fn test_export_empty_or_missing_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("history.txt"));
        let csv_path = dir.path().join("out.csv");

        assert!(matches!(log.export_csv(&csv_path), Err(ConvertError::EmptyHistory)));
        assert!(!csv_path.exists());

        std::fs::write(log.path(), "").unwrap();
        assert!(matches!(log.export_csv(&csv_path), Err(ConvertError::EmptyHistory)));
        assert!(!csv_path.exists());
    }
}
