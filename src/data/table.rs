use chrono::NaiveDateTime;
use indexmap::IndexMap;
use tracing::trace;

use crate::error::{LabError, LabResult};

/// One typed column of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Number(Vec<f64>),
    Timestamp(Vec<NaiveDateTime>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Number(values) => values.len(),
            Self::Timestamp(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Timestamp(_) => "timestamp",
        }
    }

    pub fn as_text(&self, name: &str) -> LabResult<&[String]> {
        match self {
            Self::Text(values) => Ok(values),
            other => Err(other.type_error(name, "text")),
        }
    }

    pub fn as_numbers(&self, name: &str) -> LabResult<&[f64]> {
        match self {
            Self::Number(values) => Ok(values),
            other => Err(other.type_error(name, "number")),
        }
    }

    pub fn as_timestamps(&self, name: &str) -> LabResult<&[NaiveDateTime]> {
        match self {
            Self::Timestamp(values) => Ok(values),
            other => Err(other.type_error(name, "timestamp")),
        }
    }

    fn type_error(&self, name: &str, expected: &'static str) -> LabError {
        LabError::ColumnType {
            column: name.to_owned(),
            expected,
            actual: self.kind_name(),
        }
    }

    fn take(&self, indices: &[usize]) -> Self {
        match self {
            Self::Text(values) => Self::Text(indices.iter().map(|&i| values[i].clone()).collect()),
            Self::Number(values) => Self::Number(indices.iter().map(|&i| values[i]).collect()),
            Self::Timestamp(values) => {
                Self::Timestamp(indices.iter().map(|&i| values[i]).collect())
            }
        }
    }
}

/// In-memory table with insertion-ordered, equally long named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: IndexMap<String, Column>,
    row_count: usize,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Table::insert_column`].
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> LabResult<Self> {
        self.insert_column(name, column)?;
        Ok(self)
    }

    /// Adds a column, or replaces one in place when the name already exists.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn insert_column(&mut self, name: impl Into<String>, column: Column) -> LabResult<()> {
        let name = name.into();
        let replaces_only_column = self.columns.len() == 1 && self.columns.contains_key(&name);
        if self.columns.is_empty() || replaces_only_column {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(LabError::ColumnLength {
                column: name,
                expected: self.row_count,
                actual: column.len(),
            });
        }
        self.columns.insert(name, column);
        Ok(())
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Looks up a column, naming `dataset` in the error when absent.
    pub fn require_column(&self, name: &str, dataset: &str) -> LabResult<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| LabError::column_not_found(name, dataset))
    }

    /// Checks presence of every name in order and fails on the first gap.
    pub fn require_columns(&self, names: &[&str], dataset: &str) -> LabResult<()> {
        for name in names {
            self.require_column(name, dataset)?;
        }
        Ok(())
    }

    /// Projects the named columns, in the requested order.
    pub fn select(&self, names: &[&str]) -> LabResult<Self> {
        let mut selected = Self::new();
        for name in names {
            let column = self.require_column(name, "input")?;
            selected.insert_column(*name, column.clone())?;
        }
        Ok(selected)
    }

    /// Keeps rows whose text column `column` equals `value` exactly.
    pub fn filter_eq(&self, column: &str, value: &str) -> LabResult<Self> {
        let keys = self.require_column(column, "input")?.as_text(column)?;
        let indices: Vec<usize> = keys
            .iter()
            .enumerate()
            .filter_map(|(index, key)| (key == value).then_some(index))
            .collect();
        trace!(
            column,
            value,
            kept = indices.len(),
            total = self.row_count,
            "filter rows"
        );
        Ok(self.take_rows(&indices))
    }

    /// Splits rows by the values of a text column.
    ///
    /// Groups are keyed in order of first appearance and keep the original
    /// row order within each group.
    pub fn partition_by(&self, column: &str) -> LabResult<IndexMap<String, Self>> {
        let keys = self.require_column(column, "input")?.as_text(column)?;
        let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, key) in keys.iter().enumerate() {
            groups.entry(key.as_str()).or_default().push(index);
        }

        Ok(groups
            .into_iter()
            .map(|(key, indices)| (key.to_owned(), self.take_rows(&indices)))
            .collect())
    }

    fn take_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.take(indices)))
                .collect(),
            row_count: indices.len(),
        }
    }
}
