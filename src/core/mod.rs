pub mod axis_ticks;
pub mod line_series;
pub mod scale;
pub mod types;

pub use axis_ticks::{AxisTick, AxisTicks, time_ticks, value_ticks};
pub use line_series::{LineSegment, chronological_points, project_line_segments};
pub use scale::{LinearScale, ScaleTuning};
pub use types::{DataPoint, PlotArea, Viewport, timestamp_to_unix_seconds};
