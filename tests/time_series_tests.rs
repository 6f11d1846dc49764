mod common;

use produce_lab::data::{ForecastFrame, TimeSeries, TimeSeriesRow};
use produce_lab::{ErrorKind, LabError};

use common::{canonical_table, day, prediction_table};

#[test]
fn time_series_reads_canonical_table() {
    let table = canonical_table(day(2017, 3, 1), &[1.0, 1.5, 2.0]);
    let series = TimeSeries::from_table(&table, "train").expect("series");

    assert_eq!(series.len(), 3);
    assert_eq!(series.first_timestamp(), Some(day(2017, 3, 1)));
    assert_eq!(series.last_timestamp(), Some(day(2017, 3, 3)));
    assert_eq!(series.to_table().expect("table"), table);
}

#[test]
fn duplicate_timestamps_are_rejected_with_row_index() {
    let rows = vec![
        TimeSeriesRow::new(day(2017, 1, 1), 1.0),
        TimeSeriesRow::new(day(2017, 1, 2), 2.0),
        TimeSeriesRow::new(day(2017, 1, 2), 3.0),
    ];
    let err = TimeSeries::new(rows).expect_err("duplicate");
    assert!(matches!(err, LabError::DuplicateTimestamp { index: 2 }));
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn unordered_timestamps_are_rejected() {
    let rows = vec![
        TimeSeriesRow::new(day(2017, 1, 5), 1.0),
        TimeSeriesRow::new(day(2017, 1, 4), 2.0),
    ];
    let err = TimeSeries::new(rows).expect_err("unordered");
    assert!(matches!(
        err,
        LabError::UnorderedTimestamps {
            index: 1,
            previous: 0
        }
    ));
}

#[test]
fn train_test_split_keeps_tail_for_testing() {
    let table = canonical_table(day(2018, 1, 1), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let series = TimeSeries::from_table(&table, "full").expect("series");

    let (train, test) = series.train_test_split(2).expect("split");
    assert_eq!(train.len(), 3);
    assert_eq!(test.len(), 2);
    assert_eq!(test.first_timestamp(), Some(day(2018, 1, 4)));
    assert!(train.last_timestamp() < test.first_timestamp());
}

#[test]
fn train_test_split_rejects_degenerate_lengths() {
    let table = canonical_table(day(2018, 1, 1), &[1.0, 2.0, 3.0]);
    let series = TimeSeries::from_table(&table, "full").expect("series");

    assert!(series.train_test_split(0).is_err());
    assert!(series.train_test_split(3).is_err());
}

#[test]
fn wrong_column_type_is_a_schema_error() {
    let table = canonical_table(day(2018, 1, 1), &[1.0]);
    let err = ForecastFrame::from_table(&table, "prediction").expect_err("no yhat");
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn forecast_frame_detects_prediction_interval() {
    let plain = prediction_table(day(2019, 6, 1), &[1.0, 1.1], false);
    let banded = prediction_table(day(2019, 6, 1), &[1.0, 1.1], true);

    let plain = ForecastFrame::from_table(&plain, "forecast").expect("plain");
    let banded = ForecastFrame::from_table(&banded, "forecast").expect("banded");

    assert!(!plain.has_interval());
    assert!(banded.has_interval());
    assert_eq!(banded.lower_points().len(), 2);
    assert!(banded.lower_points()[0].y < banded.yhat_points()[0].y);
    assert!(banded.upper_points()[1].y > banded.yhat_points()[1].y);
}
