use chrono::{DateTime, Datelike, NaiveDate};
use smallvec::SmallVec;

use crate::core::types::timestamp_to_unix_seconds;

pub const AXIS_TIME_TARGET_SPACING_PX: f64 = 110.0;
pub const AXIS_VALUE_TARGET_SPACING_PX: f64 = 48.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;
const DAY_STEPS: [i64; 4] = [1, 2, 7, 14];
const MONTH_STEPS: [i32; 8] = [1, 2, 3, 6, 12, 24, 60, 120];
const MAX_TICKS: usize = 64;

/// Positioned axis label in domain units.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

pub type AxisTicks = SmallVec<[AxisTick; 16]>;

#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Round-number ticks (1, 2, 5 × 10ⁿ steps) inside `start..=end`.
#[must_use]
pub fn value_ticks(start: f64, end: f64, target_count: usize) -> AxisTicks {
    let mut ticks = AxisTicks::new();
    let span = end - start;
    if !start.is_finite() || !end.is_finite() || span <= 0.0 {
        return ticks;
    }

    let step = nice_step(span / target_count.max(1) as f64);
    let precision = (-step.log10().floor()).clamp(0.0, 6.0) as usize;
    let tolerance = step * 1e-9;
    let mut value = (start / step).ceil() * step;
    while value <= end + tolerance && ticks.len() < MAX_TICKS {
        let snapped = if value.abs() < tolerance { 0.0 } else { value };
        ticks.push(AxisTick {
            value: snapped,
            label: format!("{snapped:.precision$}"),
        });
        value += step;
    }
    ticks
}

/// Calendar-aligned ticks for a unix-seconds domain.
///
/// Short spans tick on day boundaries, longer ones on month or year starts.
#[must_use]
pub fn time_ticks(start: f64, end: f64, target_count: usize) -> AxisTicks {
    let mut ticks = AxisTicks::new();
    if !start.is_finite() || !end.is_finite() || end <= start {
        return ticks;
    }

    let target = target_count.max(1) as f64;
    let span_days = (end - start) / SECONDS_PER_DAY;

    if let Some(step_days) = DAY_STEPS
        .iter()
        .copied()
        .find(|&step| span_days / step as f64 <= target)
    {
        let step = step_days as f64 * SECONDS_PER_DAY;
        let mut value = (start / step).ceil() * step;
        while value <= end && ticks.len() < MAX_TICKS {
            if let Some(label) = format_unix_seconds(value, "%Y-%m-%d") {
                ticks.push(AxisTick { value, label });
            }
            value += step;
        }
        return ticks;
    }

    let span_months = span_days / AVERAGE_DAYS_PER_MONTH;
    let step_months = MONTH_STEPS
        .iter()
        .copied()
        .find(|&step| span_months / f64::from(step) <= target)
        .unwrap_or(MONTH_STEPS[MONTH_STEPS.len() - 1]);
    let format = if step_months >= 12 { "%Y" } else { "%Y-%m" };

    let Some(start_date) = DateTime::from_timestamp(start.ceil() as i64, 0) else {
        return ticks;
    };
    let start_date = start_date.date_naive();
    let mut month_index = start_date.year() * 12 + start_date.month0() as i32;
    if start_date.day() != 1 {
        month_index += 1;
    }
    month_index = month_index.div_euclid(step_months) * step_months
        + if month_index.rem_euclid(step_months) == 0 {
            0
        } else {
            step_months
        };

    while ticks.len() < MAX_TICKS {
        let Some(value) = month_start_seconds(month_index) else {
            break;
        };
        if value > end {
            break;
        }
        if let Some(label) = format_unix_seconds(value, format) {
            ticks.push(AxisTick { value, label });
        }
        month_index += step_months;
    }
    ticks
}

#[must_use]
pub fn format_unix_seconds(seconds: f64, format: &str) -> Option<String> {
    DateTime::from_timestamp(seconds.floor() as i64, 0)
        .map(|time| time.naive_utc().format(format).to_string())
}

fn month_start_seconds(month_index: i32) -> Option<f64> {
    let year = month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(timestamp_to_unix_seconds)
}

fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::{nice_step, time_ticks, value_ticks};

    #[test]
    fn nice_step_rounds_up_to_one_two_five() {
        assert!((nice_step(0.13) - 0.2).abs() < 1e-12);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.5), 10.0);
    }

    #[test]
    fn value_ticks_stay_inside_domain() {
        let ticks = value_ticks(0.83, 2.07, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.value >= 0.83 && t.value <= 2.07));
        assert_eq!(ticks[0].label, "1.0");
    }

    #[test]
    fn multi_year_spans_tick_on_month_starts() {
        // 2015-01-04 .. 2018-03-25
        let ticks = time_ticks(1_420_329_600.0, 1_521_936_000.0, 8);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 9);
        assert!(ticks.iter().all(|t| t.label.len() == 4 || t.label.len() == 7));
    }

    #[test]
    fn short_spans_tick_on_days() {
        let start = 1_420_329_600.0;
        let ticks = time_ticks(start, start + 5.0 * 86_400.0, 6);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "2015-01-04");
    }
}
