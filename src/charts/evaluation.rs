use crate::charts::{CaseCharts, ChartOutput, ChartSeries, LineChart, ModelPlotRequest};
use crate::data::{DS_COLUMN, ForecastFrame, Table, TimeSeries, Y_COLUMN, YHAT_COLUMN};
use crate::error::LabResult;
use crate::params::PlotArgs;
use crate::render::{LineStrokeStyle, Renderer};

const TITLE_SUFFIX: &str = "Model";

impl<R: Renderer> CaseCharts<R> {
    /// Overlays the train and test actuals with the model's predictions.
    ///
    /// `train` and `test` use the canonical `[ds, y]` schema; `prediction`
    /// carries `ds` and `yhat`.
    pub fn plot_train_test_prediction(
        &mut self,
        train: &Table,
        test: &Table,
        prediction: &Table,
        request: ModelPlotRequest,
    ) -> LabResult<ChartOutput> {
        require_evaluation_columns(train, test, prediction)?;

        let train = TimeSeries::from_table(train, "train")?;
        let test = TimeSeries::from_table(test, "test")?;
        let prediction = ForecastFrame::from_table(prediction, "prediction")?;

        let value_label = request.pred_parameter.column_name();
        let chart = LineChart::new(request.label(TITLE_SUFFIX))
            .with_axis_labels("Date", value_label)
            .with_series(ChartSeries::new("Train", train.to_points()))
            .with_series(ChartSeries::new("Test", test.to_points()))
            .with_series(
                ChartSeries::new("Prediction", prediction.yhat_points())
                    .with_stroke_style(LineStrokeStyle::Dashed),
            );

        let save_as = request
            .save_plot
            .then(|| request.file_name(TITLE_SUFFIX));
        self.emit(&chart, save_as)
    }

    /// Loosely-typed entry point: columns first, then arguments.
    pub fn plot_train_test_prediction_from_args(
        &mut self,
        train: &Table,
        test: &Table,
        prediction: &Table,
        args: &PlotArgs,
    ) -> LabResult<ChartOutput> {
        require_evaluation_columns(train, test, prediction)?;
        let request = ModelPlotRequest::from_args(args)?;
        self.plot_train_test_prediction(train, test, prediction, request)
    }
}

fn require_evaluation_columns(train: &Table, test: &Table, prediction: &Table) -> LabResult<()> {
    train.require_columns(&[DS_COLUMN, Y_COLUMN], "train")?;
    test.require_columns(&[DS_COLUMN, Y_COLUMN], "test")?;
    prediction.require_columns(&[DS_COLUMN, YHAT_COLUMN], "prediction")
}
