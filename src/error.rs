use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type LabResult<T> = Result<T, LabError>;

/// Coarse failure category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A dataset is missing a column or a column has the wrong shape.
    Schema,
    /// A categorical argument is outside its allowed set.
    Domain,
    /// A loosely-typed argument is missing or has the wrong JSON type.
    Type,
    /// A filesystem operation failed.
    Filesystem,
    /// Data content or geometry is unusable.
    Data,
}

#[derive(Debug, Error)]
pub enum LabError {
    #[error("column `{column}` not found in {dataset} dataset")]
    ColumnNotFound { column: String, dataset: String },

    #[error("column `{column}` holds {actual} values, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("column `{column}` has {actual} rows, table has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("column `{column}` appears more than once")]
    DuplicateColumn { column: String },

    #[error("invalid value `{value}` for `{argument}`: expected one of {expected}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        expected: String,
    },

    #[error("argument `{argument}` must be {expected}, got {actual}")]
    InvalidArgumentType {
        argument: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("missing required argument `{argument}`")]
    MissingArgument { argument: &'static str },

    #[error("duplicate timestamp at row {index}")]
    DuplicateTimestamp { index: usize },

    #[error("timestamps must be increasing: row {index} is earlier than row {previous}")]
    UnorderedTimestamps { index: usize, previous: usize },

    #[error("renderer `{backend}` cannot export png artifacts")]
    UnsupportedExport { backend: &'static str },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("filesystem error at `{}`: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LabError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ColumnNotFound { .. }
            | Self::ColumnType { .. }
            | Self::ColumnLength { .. }
            | Self::DuplicateColumn { .. } => ErrorKind::Schema,
            Self::InvalidArgument { .. } => ErrorKind::Domain,
            Self::InvalidArgumentType { .. } | Self::MissingArgument { .. } => ErrorKind::Type,
            Self::Filesystem { .. } => ErrorKind::Filesystem,
            Self::DuplicateTimestamp { .. }
            | Self::UnorderedTimestamps { .. }
            | Self::UnsupportedExport { .. }
            | Self::InvalidViewport { .. }
            | Self::InvalidData(_)
            | Self::Csv(_) => ErrorKind::Data,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn column_not_found(column: &str, dataset: &str) -> Self {
        Self::ColumnNotFound {
            column: column.to_owned(),
            dataset: dataset.to_owned(),
        }
    }
}
