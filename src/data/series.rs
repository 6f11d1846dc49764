use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::data::{
    Column, DS_COLUMN, Table, Y_COLUMN, YHAT_COLUMN, YHAT_LOWER_COLUMN, YHAT_UPPER_COLUMN,
};
use crate::error::{LabError, LabResult};

/// One observation in the canonical schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub ds: NaiveDateTime,
    pub y: f64,
}

impl TimeSeriesRow {
    #[must_use]
    pub fn new(ds: NaiveDateTime, y: f64) -> Self {
        Self { ds, y }
    }
}

/// Univariate series with unique, strictly increasing timestamps.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeSeries {
    rows: Vec<TimeSeriesRow>,
}

impl TimeSeries {
    pub fn new(rows: Vec<TimeSeriesRow>) -> LabResult<Self> {
        ensure_increasing(rows.iter().map(|row| row.ds))?;
        Ok(Self { rows })
    }

    /// Reads a canonical `[ds, y]` table; `dataset` names it in errors.
    pub fn from_table(table: &Table, dataset: &str) -> LabResult<Self> {
        let ds = table
            .require_column(DS_COLUMN, dataset)?
            .as_timestamps(DS_COLUMN)?;
        let y = table
            .require_column(Y_COLUMN, dataset)?
            .as_numbers(Y_COLUMN)?;

        Self::new(
            ds.iter()
                .zip(y)
                .map(|(&ds, &y)| TimeSeriesRow::new(ds, y))
                .collect(),
        )
    }

    #[must_use]
    pub fn rows(&self) -> &[TimeSeriesRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.first().map(|row| row.ds)
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.last().map(|row| row.ds)
    }

    /// Splits chronologically, keeping the last `test_len` rows for testing.
    pub fn train_test_split(&self, test_len: usize) -> LabResult<(Self, Self)> {
        if test_len == 0 || test_len >= self.rows.len() {
            return Err(LabError::InvalidData(format!(
                "test length must be in 1..{}, got {test_len}",
                self.rows.len()
            )));
        }

        let (train, test) = self.rows.split_at(self.rows.len() - test_len);
        Ok((
            Self {
                rows: train.to_vec(),
            },
            Self {
                rows: test.to_vec(),
            },
        ))
    }

    /// Converts back into a canonical `[ds, y]` table.
    pub fn to_table(&self) -> LabResult<Table> {
        Table::new()
            .with_column(
                DS_COLUMN,
                Column::Timestamp(self.rows.iter().map(|row| row.ds).collect()),
            )?
            .with_column(
                Y_COLUMN,
                Column::Number(self.rows.iter().map(|row| row.y).collect()),
            )
    }

    #[must_use]
    pub fn to_points(&self) -> Vec<DataPoint> {
        self.rows
            .iter()
            .map(|row| DataPoint::from_timestamp(row.ds, row.y))
            .collect()
    }
}

/// One forecast step: point prediction with optional interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub ds: NaiveDateTime,
    pub yhat: f64,
    #[serde(default)]
    pub yhat_lower: Option<f64>,
    #[serde(default)]
    pub yhat_upper: Option<f64>,
}

/// Forecast output keyed by `ds` with a `yhat` column.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ForecastFrame {
    rows: Vec<ForecastRow>,
}

impl ForecastFrame {
    pub fn new(rows: Vec<ForecastRow>) -> LabResult<Self> {
        ensure_increasing(rows.iter().map(|row| row.ds))?;
        Ok(Self { rows })
    }

    /// Reads `ds`/`yhat`, plus `yhat_lower`/`yhat_upper` when present.
    pub fn from_table(table: &Table, dataset: &str) -> LabResult<Self> {
        let ds = table
            .require_column(DS_COLUMN, dataset)?
            .as_timestamps(DS_COLUMN)?;
        let yhat = table
            .require_column(YHAT_COLUMN, dataset)?
            .as_numbers(YHAT_COLUMN)?;
        let lower = optional_numbers(table, YHAT_LOWER_COLUMN)?;
        let upper = optional_numbers(table, YHAT_UPPER_COLUMN)?;

        let rows = ds
            .iter()
            .zip(yhat)
            .enumerate()
            .map(|(index, (&ds, &yhat))| ForecastRow {
                ds,
                yhat,
                yhat_lower: lower.map(|values| values[index]),
                yhat_upper: upper.map(|values| values[index]),
            })
            .collect();
        Self::new(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_interval(&self) -> bool {
        !self.rows.is_empty()
            && self
                .rows
                .iter()
                .all(|row| row.yhat_lower.is_some() && row.yhat_upper.is_some())
    }

    #[must_use]
    pub fn yhat_points(&self) -> Vec<DataPoint> {
        self.rows
            .iter()
            .map(|row| DataPoint::from_timestamp(row.ds, row.yhat))
            .collect()
    }

    #[must_use]
    pub fn lower_points(&self) -> Vec<DataPoint> {
        self.rows
            .iter()
            .filter_map(|row| row.yhat_lower.map(|v| DataPoint::from_timestamp(row.ds, v)))
            .collect()
    }

    #[must_use]
    pub fn upper_points(&self) -> Vec<DataPoint> {
        self.rows
            .iter()
            .filter_map(|row| row.yhat_upper.map(|v| DataPoint::from_timestamp(row.ds, v)))
            .collect()
    }
}

fn optional_numbers<'a>(table: &'a Table, name: &str) -> LabResult<Option<&'a [f64]>> {
    table
        .column(name)
        .map(|column| column.as_numbers(name))
        .transpose()
}

fn ensure_increasing(stamps: impl Iterator<Item = NaiveDateTime>) -> LabResult<()> {
    let mut previous: Option<NaiveDateTime> = None;
    for (index, ds) in stamps.enumerate() {
        if let Some(prev) = previous {
            match ds.cmp(&prev) {
                Ordering::Greater => {}
                Ordering::Equal => return Err(LabError::DuplicateTimestamp { index }),
                Ordering::Less => {
                    return Err(LabError::UnorderedTimestamps {
                        index,
                        previous: index - 1,
                    });
                }
            }
        }
        previous = Some(ds);
    }
    Ok(())
}
