use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale};
use crate::error::LabResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Returns finite points ordered by time, keeping input order for equal times.
#[must_use]
pub fn chronological_points(points: &[DataPoint]) -> Vec<DataPoint> {
    let mut ordered: Vec<DataPoint> = points.iter().copied().filter(|p| p.is_finite()).collect();
    ordered.sort_by_key(|point| OrderedFloat(point.x));
    ordered
}

/// Projects line-series points into adjacent line segments.
///
/// Points are taken in the given order. The function is deterministic and
/// side-effect free so frame building and tests consume the same geometry.
pub fn project_line_segments(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> LabResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        let x = x_scale.domain_to_pixel(point.x)?;
        let y = y_scale.domain_to_pixel(point.y)?;
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}
