//! Error types for loading and aggregating the dataset

use std::path::PathBuf;

#[derive(Debug)]
pub enum DashboardError {
    /// A required input file does not exist
    FileNotFound { source: String, path: PathBuf },
    /// A timestamp column holds a non-empty value that cannot be parsed
    MalformedTimestamp {
        source: String,
        column: String,
        row: usize,
        value: String,
    },
    /// A numeric column holds an unparseable or negative value
    MalformedNumber {
        source: String,
        column: String,
        row: usize,
        value: String,
    },
    /// A required column is absent from the header row
    MissingColumn { source: String, column: String },
    Csv(csv::Error),
    Io(std::io::Error),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Csv(err)
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err)
    }
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileNotFound { source, path } => {
                write!(f, "Source '{}' not found: {}", source, path.display())
            }
            DashboardError::MalformedTimestamp { source, column, row, value } => write!(
                f,
                "Malformed timestamp in {}.{} (row {}): '{}'",
                source, column, row, value
            ),
            DashboardError::MalformedNumber { source, column, row, value } => write!(
                f,
                "Malformed number in {}.{} (row {}): '{}'",
                source, column, row, value
            ),
            DashboardError::MissingColumn { source, column } => {
                write!(f, "Source '{}' is missing required column '{}'", source, column)
            }
            DashboardError::Csv(e) => write!(f, "CSV error: {}", e),
            DashboardError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {}

pub type DashboardResult<T> = Result<T, DashboardError>;
