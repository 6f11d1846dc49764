use crate::charts::ChartStyle;
use crate::core::axis_ticks::{
    AXIS_TIME_TARGET_SPACING_PX, AXIS_VALUE_TARGET_SPACING_PX, axis_tick_target_count,
};
use crate::core::{
    DataPoint, LinearScale, PlotArea, ScaleTuning, Viewport, chronological_points,
    project_line_segments, time_ticks, value_ticks,
};
use crate::error::{LabError, LabResult};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const TICK_LABEL_GAP_PX: f64 = 6.0;
const TICK_MARK_LENGTH_PX: f64 = 4.0;

/// One named line of a [`LineChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
    pub color: Option<Color>,
    pub stroke_style: LineStrokeStyle,
}

impl ChartSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }
}

/// Time-on-x line chart description, independent of any backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    /// Lays out title, axes, grid, series lines and legend for `viewport`.
    ///
    /// Each series is drawn in ascending time order. Non-finite samples are
    /// skipped.
    pub fn build_frame(&self, viewport: Viewport, style: &ChartStyle) -> LabResult<RenderFrame> {
        let area = plot_area(viewport, style)?;
        let ordered: Vec<Vec<DataPoint>> = self
            .series
            .iter()
            .map(|series| chronological_points(&series.points))
            .collect();
        if ordered.iter().all(Vec::is_empty) {
            return Err(LabError::InvalidData(format!(
                "chart `{}` has no plottable points",
                self.title
            )));
        }

        let x_scale = LinearScale::fit(
            ordered.iter().flatten().map(|p| p.x),
            ScaleTuning::TIME,
            area.left,
            area.right(),
        )?;
        let y_scale = LinearScale::fit(
            ordered.iter().flatten().map(|p| p.y),
            ScaleTuning::VALUE,
            area.bottom(),
            area.top,
        )?;

        let mut frame = RenderFrame::new(viewport)
            .with_rect(RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                style.background_color,
            ))
            .with_rect(
                RectPrimitive::new(
                    area.left,
                    area.top,
                    area.width,
                    area.height,
                    style.plot_background_color,
                )
                .with_border(1.0, style.axis_color),
            );

        push_value_axis(&mut frame, area, y_scale, style)?;
        push_time_axis(&mut frame, area, x_scale, style)?;

        for (index, (series, points)) in self.series.iter().zip(&ordered).enumerate() {
            let color = series.color.unwrap_or_else(|| style.series_color(index));
            for segment in project_line_segments(points, x_scale, y_scale)? {
                frame.push_line(
                    LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        style.series_stroke_width,
                        color,
                    )
                    .with_stroke_style(series.stroke_style),
                );
            }
        }

        push_labels(&mut frame, self, area, viewport, style);
        push_legend(&mut frame, &self.series, area, style);
        Ok(frame)
    }
}

fn plot_area(viewport: Viewport, style: &ChartStyle) -> LabResult<PlotArea> {
    let invalid = || LabError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    };
    if !viewport.is_valid() {
        return Err(invalid());
    }

    let area = PlotArea {
        left: style.margin_left_px,
        top: style.margin_top_px,
        width: f64::from(viewport.width) - style.margin_left_px - style.margin_right_px,
        height: f64::from(viewport.height) - style.margin_top_px - style.margin_bottom_px,
    };
    if !area.is_valid() {
        return Err(invalid());
    }
    Ok(area)
}

fn push_value_axis(
    frame: &mut RenderFrame,
    area: PlotArea,
    y_scale: LinearScale,
    style: &ChartStyle,
) -> LabResult<()> {
    let (domain_start, domain_end) = y_scale.domain();
    let target = axis_tick_target_count(area.height, AXIS_VALUE_TARGET_SPACING_PX, 2, 12);
    for tick in value_ticks(domain_start, domain_end, target) {
        let y = y_scale.domain_to_pixel(tick.value)?;
        frame.push_line(LinePrimitive::new(
            area.left,
            y,
            area.right(),
            y,
            style.grid_stroke_width,
            style.grid_color,
        ));
        frame.push_line(LinePrimitive::new(
            area.left - TICK_MARK_LENGTH_PX,
            y,
            area.left,
            y,
            1.0,
            style.axis_color,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label,
            area.left - TICK_MARK_LENGTH_PX - TICK_LABEL_GAP_PX,
            y - style.tick_font_size_px * 0.6,
            style.tick_font_size_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

fn push_time_axis(
    frame: &mut RenderFrame,
    area: PlotArea,
    x_scale: LinearScale,
    style: &ChartStyle,
) -> LabResult<()> {
    let (domain_start, domain_end) = x_scale.domain();
    let target = axis_tick_target_count(area.width, AXIS_TIME_TARGET_SPACING_PX, 2, 12);
    for tick in time_ticks(domain_start, domain_end, target) {
        let x = x_scale.domain_to_pixel(tick.value)?;
        frame.push_line(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom(),
            style.grid_stroke_width,
            style.grid_color,
        ));
        frame.push_line(LinePrimitive::new(
            x,
            area.bottom(),
            x,
            area.bottom() + TICK_MARK_LENGTH_PX,
            1.0,
            style.axis_color,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label,
            x,
            area.bottom() + TICK_MARK_LENGTH_PX + TICK_LABEL_GAP_PX,
            style.tick_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

fn push_labels(
    frame: &mut RenderFrame,
    chart: &LineChart,
    area: PlotArea,
    viewport: Viewport,
    style: &ChartStyle,
) {
    if !chart.title.is_empty() {
        frame.push_text(TextPrimitive::new(
            chart.title.clone(),
            f64::from(viewport.width) / 2.0,
            style.title_font_size_px,
            style.title_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
    if !chart.x_label.is_empty() {
        frame.push_text(TextPrimitive::new(
            chart.x_label.clone(),
            area.left + area.width / 2.0,
            area.bottom() + style.margin_bottom_px * 0.55,
            style.axis_label_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
    if !chart.y_label.is_empty() {
        frame.push_text(TextPrimitive::new(
            chart.y_label.clone(),
            area.left,
            area.top - style.axis_label_font_size_px * 1.8,
            style.axis_label_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}

fn push_legend(frame: &mut RenderFrame, series: &[ChartSeries], area: PlotArea, style: &ChartStyle) {
    let named: Vec<(usize, &ChartSeries)> = series
        .iter()
        .enumerate()
        .filter(|(_, series)| !series.name.is_empty())
        .collect();
    if named.is_empty() {
        return;
    }

    let capacity = (area.height / style.legend_row_height_px).floor().max(1.0) as usize;
    let shown = if named.len() > capacity {
        capacity - 1
    } else {
        named.len()
    };
    let left = area.right() + 16.0;

    for (row, (index, series)) in named.iter().take(shown).enumerate() {
        let center_y = area.top + (row as f64 + 0.5) * style.legend_row_height_px;
        let color = series.color.unwrap_or_else(|| style.series_color(*index));
        frame.push_line(
            LinePrimitive::new(
                left,
                center_y,
                left + style.legend_sample_width_px,
                center_y,
                style.series_stroke_width + 1.0,
                color,
            )
            .with_stroke_style(series.stroke_style),
        );
        frame.push_text(TextPrimitive::new(
            series.name.clone(),
            left + style.legend_sample_width_px + 6.0,
            center_y - style.legend_font_size_px * 0.6,
            style.legend_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }

    let hidden = named.len() - shown;
    if hidden > 0 {
        let y = area.top + shown as f64 * style.legend_row_height_px;
        frame.push_text(TextPrimitive::new(
            format!("+{hidden} more"),
            left,
            y,
            style.legend_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}
