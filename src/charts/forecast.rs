use crate::charts::{CaseCharts, ChartOutput, ChartSeries, LineChart, ModelPlotRequest};
use crate::data::{DS_COLUMN, ForecastFrame, Table, TimeSeries, Y_COLUMN, YHAT_COLUMN};
use crate::error::LabResult;
use crate::params::PlotArgs;
use crate::render::{LineStrokeStyle, Renderer};

const TITLE_SUFFIX: &str = "Forecast";

impl<R: Renderer> CaseCharts<R> {
    /// Plots history against a forecast, with the prediction interval as
    /// dashed bounds when `yhat_lower`/`yhat_upper` are present.
    pub fn plot_forecast(
        &mut self,
        actuals: &Table,
        forecast: &Table,
        request: ModelPlotRequest,
    ) -> LabResult<ChartOutput> {
        require_forecast_columns(actuals, forecast)?;

        let actuals = TimeSeries::from_table(actuals, "actuals")?;
        let forecast = ForecastFrame::from_table(forecast, "forecast")?;

        let mut chart = LineChart::new(request.label(TITLE_SUFFIX))
            .with_axis_labels("Date", request.pred_parameter.column_name())
            .with_series(ChartSeries::new("Actual", actuals.to_points()))
            .with_series(ChartSeries::new("Forecast", forecast.yhat_points()));

        if forecast.has_interval() {
            let band_color = self.style().series_color(1);
            chart = chart
                .with_series(
                    ChartSeries::new("Lower bound", forecast.lower_points())
                        .with_color(band_color)
                        .with_stroke_style(LineStrokeStyle::Dashed),
                )
                .with_series(
                    ChartSeries::new("Upper bound", forecast.upper_points())
                        .with_color(band_color)
                        .with_stroke_style(LineStrokeStyle::Dashed),
                );
        }

        let save_as = request
            .save_plot
            .then(|| request.file_name(TITLE_SUFFIX));
        self.emit(&chart, save_as)
    }

    /// Loosely-typed entry point: columns first, then arguments.
    pub fn plot_forecast_from_args(
        &mut self,
        actuals: &Table,
        forecast: &Table,
        args: &PlotArgs,
    ) -> LabResult<ChartOutput> {
        require_forecast_columns(actuals, forecast)?;
        let request = ModelPlotRequest::from_args(args)?;
        self.plot_forecast(actuals, forecast, request)
    }
}

fn require_forecast_columns(actuals: &Table, forecast: &Table) -> LabResult<()> {
    actuals.require_columns(&[DS_COLUMN, Y_COLUMN], "actuals")?;
    forecast.require_columns(&[DS_COLUMN, YHAT_COLUMN], "forecast")
}
