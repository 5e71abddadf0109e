use thiserror::Error;

/// Error type for termlytics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be normalized into a tabular dataset
    #[error("Unsupported input kind: {0}")]
    UnsupportedInputKind(String),

    /// Dataset has no rows after normalization
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Correlation needs at least two numeric columns
    #[error("Not enough numeric columns for correlation: found {found}, need at least 2")]
    InsufficientNumericColumns { found: usize },

    /// Numeric binning could not be computed for a column
    #[error("Binning failed: {0}")]
    BinningFailure(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("TOML error")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this condition is absorbed into a placeholder panel rather than
    /// surfaced to the caller of `render`
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyDataset
                | Error::InsufficientNumericColumns { .. }
                | Error::BinningFailure(_)
        )
    }
}
