//! produce-lab: exploratory-analysis helpers for produce price and volume
//! time series.
//!
//! The crate reshapes wide datasets into the canonical `ds`/`y` schema used
//! by univariate forecasting models, renders actuals, evaluation and forecast
//! charts through a pluggable [`render::Renderer`], and resets output
//! directories between runs.

pub mod charts;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod fs_util;
pub mod params;
pub mod render;
pub mod telemetry;

pub use charts::{ActualsPlotRequest, CaseCharts, ChartOutput, ModelPlotRequest};
pub use config::LabPaths;
pub use data::{Column, Table, TimeSeries, to_canonical};
pub use error::{ErrorKind, LabError, LabResult};
pub use fs_util::delete_dir_content;
pub use params::{ArgumentChoice, Measurement, ModelType, PlotArgs, ProductType};
