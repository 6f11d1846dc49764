use tracing::debug;

use crate::data::Table;
use crate::error::LabResult;

/// Canonical timestamp column name expected by forecasting models.
pub const DS_COLUMN: &str = "ds";
/// Canonical value column name expected by forecasting models.
pub const Y_COLUMN: &str = "y";
/// Predicted value column produced by forecasting models.
pub const YHAT_COLUMN: &str = "yhat";
pub const YHAT_LOWER_COLUMN: &str = "yhat_lower";
pub const YHAT_UPPER_COLUMN: &str = "yhat_upper";

/// Projects two columns of a wide table onto the canonical `[ds, y]` schema.
///
/// Row count, row order and cell values are preserved; nothing is sorted,
/// aggregated or coerced. Both names are checked before any copy, the
/// timestamp column first.
pub fn to_canonical(table: &Table, ds_column: &str, y_column: &str) -> LabResult<Table> {
    let ds = table.require_column(ds_column, "input")?;
    let y = table.require_column(y_column, "input")?;

    let canonical = Table::new()
        .with_column(DS_COLUMN, ds.clone())?
        .with_column(Y_COLUMN, y.clone())?;

    debug!(
        ds_column,
        y_column,
        rows = canonical.row_count(),
        "reshaped to canonical schema"
    );
    Ok(canonical)
}
