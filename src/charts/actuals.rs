use crate::charts::{ActualsPlotRequest, CaseCharts, ChartOutput, ChartSeries, LineChart};
use crate::core::DataPoint;
use crate::data::Table;
use crate::error::LabResult;
use crate::params::{ArgumentChoice, PlotArgs};
use crate::render::Renderer;

pub const DATE_COLUMN: &str = "Date";
pub const TYPE_COLUMN: &str = "type";
pub const REGION_COLUMN: &str = "region";

const WIDE_DATASET: &str = "wide";

impl<R: Renderer> CaseCharts<R> {
    /// Plots the selected measurement over time for one product type, one
    /// line per region.
    pub fn plot_actuals(
        &mut self,
        data: &Table,
        request: ActualsPlotRequest,
    ) -> LabResult<ChartOutput> {
        data.require_columns(
            &[
                DATE_COLUMN,
                TYPE_COLUMN,
                REGION_COLUMN,
                request.y_column.column_name(),
            ],
            WIDE_DATASET,
        )?;

        let chart = actuals_chart(data, request)?;
        let save_as = request.save_plot.then(|| request.file_name());
        self.emit(&chart, save_as)
    }

    /// Loosely-typed entry point: fixed columns, then arguments, then the
    /// measurement column.
    pub fn plot_actuals_from_args(
        &mut self,
        data: &Table,
        args: &PlotArgs,
    ) -> LabResult<ChartOutput> {
        data.require_columns(&[DATE_COLUMN, TYPE_COLUMN, REGION_COLUMN], WIDE_DATASET)?;
        let request = ActualsPlotRequest::from_args(args)?;
        self.plot_actuals(data, request)
    }
}

fn actuals_chart(data: &Table, request: ActualsPlotRequest) -> LabResult<LineChart> {
    let value_column = request.y_column.column_name();
    let rows = data.filter_eq(TYPE_COLUMN, request.product_type.token())?;

    let mut chart =
        LineChart::new(request.title()).with_axis_labels(DATE_COLUMN, value_column);
    for (region, group) in rows.partition_by(REGION_COLUMN)? {
        let dates = group
            .require_column(DATE_COLUMN, WIDE_DATASET)?
            .as_timestamps(DATE_COLUMN)?;
        let values = group
            .require_column(value_column, WIDE_DATASET)?
            .as_numbers(value_column)?;
        let points = dates
            .iter()
            .zip(values)
            .map(|(&date, &value)| DataPoint::from_timestamp(date, value))
            .collect();
        chart = chart.with_series(ChartSeries::new(region, points));
    }
    Ok(chart)
}
