mod common;

use produce_lab::render::LineStrokeStyle;
use produce_lab::{
    CaseCharts, ErrorKind, LabPaths, Measurement, ModelPlotRequest, ModelType, PlotArgs,
    ProductType,
};

use common::{RecordingRenderer, canonical_table, day, dir_entry_count, prediction_table};

fn history() -> produce_lab::Table {
    canonical_table(
        day(2018, 1, 1),
        &[1.05, 1.08, 1.02, 1.11, 1.15, 1.13, 1.17, 1.20],
    )
}

#[test]
fn forecast_chart_draws_interval_bounds_when_present() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21, 1.23, 1.24], true);

    let request = ModelPlotRequest::new(
        Measurement::AveragePrice,
        ProductType::Conventional,
        ModelType::FineTuned,
    );
    let output = charts
        .plot_forecast(&history(), &forecast, request)
        .expect("plot");

    assert_eq!(
        output.title,
        "AveragePrice Conventional - Fine Tuned Forecast"
    );
    for name in ["Actual", "Forecast", "Lower bound", "Upper bound"] {
        assert!(output.frame.contains_text(name), "legend entry {name}");
    }
    let dashed = output
        .frame
        .lines
        .iter()
        .filter(|line| line.stroke_style == LineStrokeStyle::Dashed)
        .count();
    // Two bounds with two segments each plus two legend samples.
    assert_eq!(dashed, 6);
}

#[test]
fn forecast_chart_without_interval_has_two_series() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21, 1.23], false);

    let request = ModelPlotRequest::new(
        Measurement::TotalVolume,
        ProductType::Organic,
        ModelType::Default,
    );
    let output = charts
        .plot_forecast(&history(), &forecast, request)
        .expect("plot");

    assert!(output.frame.contains_text("Forecast"));
    assert!(!output.frame.contains_text("Lower bound"));
}

#[test]
fn saved_forecast_chart_uses_forecast_file_name() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21, 1.23], true);

    let args = PlotArgs::default()
        .with("pred_parameter", "AveragePrice")
        .with("product_type", "organic")
        .with("model_type", "Default")
        .with("save_plot", true);
    charts
        .plot_forecast_from_args(&history(), &forecast, &args)
        .expect("plot");

    let expected = charts
        .paths()
        .output_path("AveragePrice Organic - Default Forecast.png");
    assert!(expected.is_file());
    assert_eq!(dir_entry_count(&charts.paths().outputs_dir), 1);
}

#[test]
fn forecast_argument_errors_leave_outputs_untouched() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21, 1.23], true);

    let args = PlotArgs::default()
        .with("pred_parameter", "AveragePrice")
        .with("product_type", "Conventional")
        .with("model_type", "Default")
        .with("save_plot", true);
    let err = charts
        .plot_forecast_from_args(&history(), &forecast, &args)
        .expect_err("capitalized product");

    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(charts.renderer().frames.is_empty());
    assert!(!charts.paths().outputs_dir.exists());
}

#[test]
fn forecast_with_missing_history_column_is_a_schema_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21], false);
    let history = history().select(&["ds"]).expect("select");

    let args = PlotArgs::default()
        .with("pred_parameter", "Revenue")
        .with("product_type", "organic")
        .with("model_type", "Default");
    let err = charts
        .plot_forecast_from_args(&history, &forecast, &args)
        .expect_err("missing y");

    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn unknown_prediction_parameter_is_a_domain_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut charts = CaseCharts::new(RecordingRenderer::default(), LabPaths::from_root(tmp.path()));
    let forecast = prediction_table(day(2018, 1, 9), &[1.21, 1.23], false);

    let args = PlotArgs::default()
        .with("pred_parameter", "averageprice")
        .with("product_type", "organic")
        .with("model_type", "Default")
        .with("save_plot", true);
    let err = charts
        .plot_forecast_from_args(&history(), &forecast, &args)
        .expect_err("case-sensitive measurement");

    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(charts.renderer().frames.is_empty());
    assert!(!charts.paths().outputs_dir.exists());
}
