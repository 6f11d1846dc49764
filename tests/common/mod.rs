#![allow(dead_code)]

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use produce_lab::data::{Column, Table};
use produce_lab::error::{LabError, LabResult};
use produce_lab::render::{RenderFrame, Renderer};

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Renderer double that records frames and exports a PNG signature.
///
/// With `fail_png` set, export writes the signature and then fails.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RenderFrame>,
    pub fail_png: bool,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LabResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }

    fn supports_png_export(&self) -> bool {
        true
    }

    fn write_png(&self, writer: &mut dyn Write) -> LabResult<()> {
        writer
            .write_all(PNG_SIGNATURE)
            .map_err(|e| LabError::InvalidData(e.to_string()))?;
        if self.fail_png {
            return Err(LabError::InvalidData("png encoder failed".to_owned()));
        }
        Ok(())
    }
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

/// Weekly rows for two regions and both product types.
pub fn wide_table() -> Table {
    let mut dates = Vec::new();
    let mut prices = Vec::new();
    let mut volumes = Vec::new();
    let mut types = Vec::new();
    let mut regions = Vec::new();

    for (type_index, product) in ["conventional", "organic"].into_iter().enumerate() {
        for (region_index, region) in ["Albany", "West"].into_iter().enumerate() {
            for week in 0..6u32 {
                dates.push(day(2015, 1, 4) + chrono::Duration::weeks(i64::from(week)));
                prices.push(1.0 + type_index as f64 * 0.5 + region_index as f64 * 0.1 + f64::from(week) * 0.01);
                volumes.push(10_000.0 * (1.0 + region_index as f64) + f64::from(week) * 250.0);
                types.push(product.to_owned());
                regions.push(region.to_owned());
            }
        }
    }

    Table::new()
        .with_column("Date", Column::Timestamp(dates))
        .and_then(|t| t.with_column("AveragePrice", Column::Number(prices)))
        .and_then(|t| t.with_column("TotalVolume", Column::Number(volumes)))
        .and_then(|t| t.with_column("type", Column::Text(types)))
        .and_then(|t| t.with_column("region", Column::Text(regions)))
        .expect("wide table")
}

/// Canonical `[ds, y]` table with daily stamps starting at `start`.
pub fn canonical_table(start: NaiveDateTime, values: &[f64]) -> Table {
    let stamps = (0..values.len())
        .map(|i| start + chrono::Duration::days(i as i64))
        .collect();
    Table::new()
        .with_column("ds", Column::Timestamp(stamps))
        .and_then(|t| t.with_column("y", Column::Number(values.to_vec())))
        .expect("canonical table")
}

/// Prediction table with `ds`, `yhat` and optional interval columns.
pub fn prediction_table(start: NaiveDateTime, yhat: &[f64], with_interval: bool) -> Table {
    let stamps = (0..yhat.len())
        .map(|i| start + chrono::Duration::days(i as i64))
        .collect();
    let table = Table::new()
        .with_column("ds", Column::Timestamp(stamps))
        .and_then(|t| t.with_column("yhat", Column::Number(yhat.to_vec())))
        .expect("prediction table");
    if !with_interval {
        return table;
    }
    table
        .with_column(
            "yhat_lower",
            Column::Number(yhat.iter().map(|v| v - 0.1).collect()),
        )
        .and_then(|t| {
            t.with_column(
                "yhat_upper",
                Column::Number(yhat.iter().map(|v| v + 0.1).collect()),
            )
        })
        .expect("interval columns")
}

pub fn dir_entry_count(path: &std::path::Path) -> usize {
    std::fs::read_dir(path).map(|entries| entries.count()).unwrap_or(0)
}
