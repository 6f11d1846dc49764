use std::io::Cursor;

use produce_lab::data::{Column, parse_timestamp};
use produce_lab::{ErrorKind, Table, to_canonical};

const AVOCADO_SAMPLE: &str = "\
Date,AveragePrice,Total Volume,TotalVolume,type,year,region
2015-12-27,1.33,64236.62,64236.62,conventional,2015,Albany
2015-12-20,1.35,54876.98,54876.98,conventional,2015,Albany
2015-12-27,1.83,989.55,989.55,organic,2015,Albany
2015-12-27,0.93,5040365.47,5040365.47,conventional,2015,West
";

#[test]
fn csv_columns_get_inferred_types() {
    let table = Table::from_csv_reader(Cursor::new(AVOCADO_SAMPLE)).expect("csv");

    assert_eq!(table.row_count(), 4);
    assert!(matches!(table.column("Date"), Some(Column::Timestamp(_))));
    assert!(matches!(table.column("AveragePrice"), Some(Column::Number(_))));
    assert!(matches!(table.column("year"), Some(Column::Number(_))));
    assert!(matches!(table.column("type"), Some(Column::Text(_))));
    assert!(table.has_column("Total Volume"));
}

#[test]
fn csv_keeps_row_order() {
    let table = Table::from_csv_reader(Cursor::new(AVOCADO_SAMPLE)).expect("csv");
    let dates = table
        .column("Date")
        .expect("date")
        .as_timestamps("Date")
        .expect("timestamps");
    assert_eq!(dates[0], parse_timestamp("2015-12-27").expect("date"));
    assert_eq!(dates[1], parse_timestamp("2015-12-20").expect("date"));
}

#[test]
fn loaded_dataset_reshapes_to_canonical_schema() {
    let table = Table::from_csv_reader(Cursor::new(AVOCADO_SAMPLE)).expect("csv");
    let canonical = to_canonical(&table, "Date", "AveragePrice").expect("reshape");
    assert_eq!(canonical.row_count(), 4);
    assert_eq!(
        canonical.column("y"),
        Some(&Column::Number(vec![1.33, 1.35, 1.83, 0.93]))
    );
}

#[test]
fn empty_cells_in_numeric_columns_become_nan() {
    let table =
        Table::from_csv_reader(Cursor::new("ds,y\n2020-01-01,1.5\n2020-01-02,\n")).expect("csv");
    let values = table
        .column("y")
        .expect("y")
        .as_numbers("y")
        .expect("numbers");
    assert!(values[1].is_nan());
}

#[test]
fn read_csv_reports_missing_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let err = Table::read_csv(tmp.path().join("avocado.csv")).expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::Filesystem);
}

#[test]
fn read_csv_loads_from_disk() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("avocado.csv");
    std::fs::write(&file, AVOCADO_SAMPLE).expect("write");

    let table = Table::read_csv(&file).expect("load");
    assert_eq!(table.column_count(), 7);
}

#[test]
fn ragged_rows_are_a_data_error() {
    let err = Table::from_csv_reader(Cursor::new("a,b\n1,2\n3\n")).expect_err("ragged");
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn repeated_header_is_a_schema_error() {
    let err = Table::from_csv_reader(Cursor::new("region,AveragePrice,region\nAlbany,1.0,West\n"))
        .expect_err("duplicate header");

    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(matches!(
        err,
        produce_lab::LabError::DuplicateColumn { ref column } if column == "region"
    ));
}
