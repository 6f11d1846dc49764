use crate::error::{LabError, LabResult};

/// Padding applied when fitting a scale to data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTuning {
    pub start_padding_ratio: f64,
    pub end_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl ScaleTuning {
    /// Tuning used for time axes: a small horizontal margin.
    pub const TIME: Self = Self {
        start_padding_ratio: 0.02,
        end_padding_ratio: 0.02,
        min_span_absolute: 86_400.0,
    };

    /// Tuning used for value axes: headroom above and below the series.
    pub const VALUE: Self = Self {
        start_padding_ratio: 0.08,
        end_padding_ratio: 0.08,
        min_span_absolute: 0.000_001,
    };

    fn validate(self) -> LabResult<Self> {
        if !self.start_padding_ratio.is_finite()
            || !self.end_padding_ratio.is_finite()
            || self.start_padding_ratio < 0.0
            || self.end_padding_ratio < 0.0
        {
            return Err(LabError::InvalidData(
                "scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(LabError::InvalidData(
                "scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Linear mapping from a domain interval onto a pixel interval.
///
/// The pixel interval may run backwards (`start_px > end_px`), which is how
/// value axes put larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    start_px: f64,
    end_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, start_px: f64, end_px: f64) -> LabResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(LabError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !start_px.is_finite() || !end_px.is_finite() || start_px == end_px {
            return Err(LabError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            start_px,
            end_px,
        })
    }

    /// Fits the domain to `values` with padding, mapped onto `start_px..end_px`.
    pub fn fit(
        values: impl IntoIterator<Item = f64>,
        tuning: ScaleTuning,
        start_px: f64,
        end_px: f64,
    ) -> LabResult<Self> {
        let tuning = tuning.validate()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            seen = true;
            min = min.min(value);
            max = max.max(value);
        }
        if !seen {
            return Err(LabError::InvalidData(
                "scale cannot be fitted to empty data".to_owned(),
            ));
        }

        let (start, end) = normalize_range(min, max, tuning.min_span_absolute);
        let span = end - start;
        Self::new(
            start - span * tuning.start_padding_ratio,
            end + span * tuning.end_padding_ratio,
            start_px,
            end_px,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.start_px, self.end_px)
    }

    pub fn domain_to_pixel(self, value: f64) -> LabResult<f64> {
        if !value.is_finite() {
            return Err(LabError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.start_px + normalized * (self.end_px - self.start_px))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> LabResult<f64> {
        if !pixel.is_finite() {
            return Err(LabError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.start_px) / (self.end_px - self.start_px);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if end - start < min_span {
        let mid = (start + end) / 2.0;
        let half = min_span / 2.0;
        return (mid - half, mid + half);
    }
    (start, end)
}
