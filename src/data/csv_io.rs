use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use tracing::debug;

use crate::data::{Column, Table};
use crate::error::{LabError, LabResult};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the timestamp spellings found in dataset exports and forecast frames.
///
/// Plain dates map to midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

impl Table {
    /// Reads a headered CSV file, inferring one type per column.
    pub fn read_csv(path: impl AsRef<Path>) -> LabResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LabError::filesystem(path, e))?;
        let table = Self::from_csv_reader(file)?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded csv dataset"
        );
        Ok(table)
    }

    /// Reads headered CSV from any reader.
    ///
    /// A column becomes `Number` when every non-empty cell parses as `f64`
    /// (empty cells become NaN), `Timestamp` when every cell parses as a date
    /// or datetime, and `Text` otherwise. A repeated header is a schema error.
    pub fn from_csv_reader<R: Read>(reader: R) -> LabResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record?;
            for (index, column) in cells.iter_mut().enumerate() {
                column.push(record.get(index).unwrap_or_default().to_owned());
            }
        }

        let mut table = Self::new();
        for (name, raw) in headers.into_iter().zip(cells) {
            if table.has_column(&name) {
                return Err(LabError::DuplicateColumn { column: name });
            }
            table.insert_column(name, infer_column(raw))?;
        }
        Ok(table)
    }
}

fn infer_column(raw: Vec<String>) -> Column {
    if let Some(numbers) = parse_numbers(&raw) {
        return Column::Number(numbers);
    }
    if let Some(stamps) = raw
        .iter()
        .map(|cell| parse_timestamp(cell))
        .collect::<Option<Vec<_>>>()
        .filter(|stamps| !stamps.is_empty())
    {
        return Column::Timestamp(stamps);
    }
    Column::Text(raw)
}

fn parse_numbers(raw: &[String]) -> Option<Vec<f64>> {
    if raw.iter().all(String::is_empty) {
        return None;
    }
    raw.iter()
        .map(|cell| {
            if cell.is_empty() {
                Some(f64::NAN)
            } else {
                cell.parse::<f64>().ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::NaiveDate;

    #[test]
    fn plain_dates_map_to_midnight() {
        let parsed = parse_timestamp("2015-12-27").expect("date");
        let expected = NaiveDate::from_ymd_opt(2015, 12, 27)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn datetimes_keep_time_of_day() {
        let parsed = parse_timestamp("2018-03-25 06:30:00").expect("datetime");
        assert_eq!(parsed.format("%H:%M").to_string(), "06:30");
    }

    #[test]
    fn non_dates_are_rejected() {
        assert!(parse_timestamp("Albany").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
