//! In-memory CSV table with named column lookup

use super::timestamp::parse_timestamp;
use crate::error::{DashboardError, DashboardResult};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// A delimited file held in memory as header + string records
///
/// Column types are resolved per access: text columns are read as-is,
/// amounts and timestamps are parsed through [`Row`] helpers that report
/// the source, column and row on failure.
#[derive(Debug, Clone)]
pub struct Table {
    source: String,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    /// Read a table from a file on disk
    pub fn from_path(source: &str, path: &Path) -> DashboardResult<Self> {
        if !path.is_file() {
            return Err(DashboardError::FileNotFound {
                source: source.to_string(),
                path: path.to_path_buf(),
            });
        }

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        let table = Self::from_csv(source, reader)?;

        log::info!(
            "📖 Loaded {} rows from {} ({})",
            table.len(),
            source,
            path.display()
        );
        Ok(table)
    }

    /// Read a table from any reader (used for in-memory fixtures)
    pub fn from_reader<R: Read>(source: &str, reader: R) -> DashboardResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(source, reader)
    }

    fn from_csv<R: Read>(source: &str, mut reader: csv::Reader<R>) -> DashboardResult<Self> {
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            headers,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of a column that must be present
    pub fn require(&self, column: &str) -> DashboardResult<usize> {
        self.optional(column)
            .ok_or_else(|| DashboardError::MissingColumn {
                source: self.source.clone(),
                column: column.to_string(),
            })
    }

    /// Index of a column that may be absent
    pub fn optional(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(move |(index, record)| Row {
                source: &self.source,
                number: index + 1,
                record,
            })
    }
}

/// One data row, numbered from 1 (the header is not counted)
pub struct Row<'a> {
    source: &'a str,
    number: usize,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Text of a resolved column. Record lengths match the header, so an
    /// index from `require` is always in bounds.
    pub fn text(&self, index: usize) -> &'a str {
        self.record.get(index).unwrap_or("")
    }

    /// Text of an optional column, `None` when absent or empty
    pub fn opt_text(&self, index: Option<usize>) -> Option<&'a str> {
        index
            .map(|i| self.text(i))
            .filter(|value| !value.is_empty())
    }

    /// Parse a timestamp column. Empty values are absent; anything else
    /// must parse or the load fails.
    pub fn timestamp(
        &self,
        column: &str,
        index: Option<usize>,
    ) -> DashboardResult<Option<NaiveDateTime>> {
        let raw = match self.opt_text(index) {
            Some(raw) => raw,
            None => return Ok(None),
        };

        parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| DashboardError::MalformedTimestamp {
                source: self.source.to_string(),
                column: column.to_string(),
                row: self.number,
                value: raw.to_string(),
            })
    }

    /// Parse a non-negative amount. Empty values read as 0.0.
    pub fn amount(&self, column: &str, index: Option<usize>) -> DashboardResult<f64> {
        let raw = match self.opt_text(index) {
            Some(raw) => raw,
            None => return Ok(0.0),
        };

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(DashboardError::MalformedNumber {
                source: self.source.to_string(),
                column: column.to_string(),
                row: self.number,
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS_CSV: &str = "order_id,customer_id,order_purchase_timestamp,price\n\
                              o1,c1,2017-10-02 10:56:33,29.99\n\
                              o2,c2,,\n\
                              o3,c3,not-a-date,-4\n";

    #[test]
    fn test_require_reports_source_and_column() {
        let table = Table::from_reader("orders", ORDERS_CSV.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.require("order_id").unwrap(), 0);
        assert!(table.optional("order_status").is_none());

        match table.require("order_status") {
            Err(DashboardError::MissingColumn { source, column }) => {
                assert_eq!(source, "orders");
                assert_eq!(column, "order_status");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_row_parsing() {
        let table = Table::from_reader("orders", ORDERS_CSV.as_bytes()).unwrap();
        let ts = table.optional("order_purchase_timestamp");
        let price = table.optional("price");
        let rows: Vec<Row> = table.rows().collect();

        assert!(rows[0].timestamp("order_purchase_timestamp", ts).unwrap().is_some());
        assert_eq!(rows[0].amount("price", price).unwrap(), 29.99);

        // Empty values are absent, not errors
        assert_eq!(rows[1].timestamp("order_purchase_timestamp", ts).unwrap(), None);
        assert_eq!(rows[1].amount("price", price).unwrap(), 0.0);

        match rows[2].timestamp("order_purchase_timestamp", ts) {
            Err(DashboardError::MalformedTimestamp { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected MalformedTimestamp, got {:?}", other),
        }
        assert!(matches!(
            rows[2].amount("price", price),
            Err(DashboardError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.csv");

        assert!(matches!(
            Table::from_path("orders", &path),
            Err(DashboardError::FileNotFound { .. })
        ));
    }
}
