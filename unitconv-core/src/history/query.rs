//! Filtering, ordering and limiting of history records

use super::record::ConversionRecord;
use crate::error::Result;

/// Options for listing history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Keep only the N most recent records. `None` or `Some(0)` keeps all.
    pub limit: Option<usize>,

    /// Case-insensitive category name to keep
    pub category: Option<String>,
}

impl HistoryQuery {
    /// Query returning every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only the most recent `limit` records
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep only records of one category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Run the query over a stream of records.
    ///
    /// The category filter is applied while streaming; ordering needs the
    /// full set. Records are returned newest first, using the string order of
    /// the fixed-width timestamps. Records with equal timestamps keep their
    /// file order.
    pub fn apply<I>(&self, records: I) -> Result<HistoryPage>
    where
        I: IntoIterator<Item = Result<ConversionRecord>>,
    {
        let mut matched = Vec::new();
        for record in records {
            let record = record?;
            if let Some(ref category) = self.category {
                if !record.is_category(category) {
                    continue;
                }
            }
            matched.push(record);
        }

        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut truncated = false;
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            if limit < matched.len() {
                matched.truncate(limit);
                truncated = true;
            }
        }

        Ok(HistoryPage {
            records: matched,
            truncated,
        })
    }
}

/// Result of a history query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPage {
    /// Matching records, newest first
    pub records: Vec<ConversionRecord>,

    /// Whether the limit cut off older records
    pub truncated: bool,
}

impl HistoryPage {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Category;

    fn record(ts: &str, category: Category) -> Result<ConversionRecord> {
        Ok(ConversionRecord::new(ts, category, "a", "b", 1.0, 1.0))
    }

    fn sample() -> Vec<Result<ConversionRecord>> {
        vec![
            record("2024-01-01 08:00:00", Category::Length),
            record("2024-01-03 08:00:00", Category::Weight),
            record("2024-01-02 08:00:00", Category::Length),
            record("2024-01-04 08:00:00", Category::Temperature),
        ]
    }

    fn timestamps(page: &HistoryPage) -> Vec<&str> {
        page.records.iter().map(|r| r.timestamp.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let page = HistoryQuery::all().apply(sample()).unwrap();
        assert_eq!(
            timestamps(&page),
            vec![
                "2024-01-04 08:00:00",
                "2024-01-03 08:00:00",
                "2024-01-02 08:00:00",
                "2024-01-01 08:00:00",
            ]
        );
        assert!(!page.truncated);
    }

    #[test]
    fn test_limit_keeps_most_recent() {
        let page = HistoryQuery::all().with_limit(2).apply(sample()).unwrap();
        assert_eq!(
            timestamps(&page),
            vec!["2024-01-04 08:00:00", "2024-01-03 08:00:00"]
        );
        assert!(page.truncated);
    }

    #[test]
    fn test_limit_zero_or_large_keeps_all() {
        let page = HistoryQuery::all().with_limit(0).apply(sample()).unwrap();
        assert_eq!(page.len(), 4);
        assert!(!page.truncated);

        let page = HistoryQuery::all().with_limit(4).apply(sample()).unwrap();
        assert_eq!(page.len(), 4);
        assert!(!page.truncated);
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let page = HistoryQuery::all()
            .with_category("length")
            .apply(sample())
            .unwrap();
        assert_eq!(
            timestamps(&page),
            vec!["2024-01-02 08:00:00", "2024-01-01 08:00:00"]
        );
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let page = HistoryQuery::all()
            .with_category("Volume")
            .apply(sample())
            .unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_equal_timestamps_keep_file_order() {
        let mut first = ConversionRecord::new("2024-01-01 00:00:00", Category::Length, "x", "y", 1.0, 1.0);
        first.from_unit = "first".into();
        let mut second = first.clone();
        second.from_unit = "second".into();

        let page = HistoryQuery::all()
            .apply(vec![Ok(first), Ok(second)])
            .unwrap();
        assert_eq!(page.records[0].from_unit, "first");
        assert_eq!(page.records[1].from_unit, "second");
    }
}
