//! Tabular datasets and the canonical `ds`/`y` time-series schema.

mod csv_io;
mod reshape;
mod series;
mod table;

pub use csv_io::parse_timestamp;
pub use reshape::{
    DS_COLUMN, Y_COLUMN, YHAT_COLUMN, YHAT_LOWER_COLUMN, YHAT_UPPER_COLUMN, to_canonical,
};
pub use series::{ForecastFrame, ForecastRow, TimeSeries, TimeSeriesRow};
pub use table::{Column, Table};
