use crate::render::Color;

/// Visual constants shared by every chart frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub background_color: Color,
    pub plot_background_color: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub title_font_size_px: f64,
    pub axis_label_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub series_stroke_width: f64,
    pub grid_stroke_width: f64,
    pub margin_left_px: f64,
    pub margin_right_px: f64,
    pub margin_top_px: f64,
    pub margin_bottom_px: f64,
    pub legend_row_height_px: f64,
    pub legend_sample_width_px: f64,
    pub palette: Vec<Color>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            plot_background_color: Color::from_hex(0xf7f8fa),
            axis_color: Color::from_hex(0x4a4f57),
            grid_color: Color::from_hex(0xdde1e6),
            text_color: Color::from_hex(0x1f2328),
            title_font_size_px: 18.0,
            axis_label_font_size_px: 13.0,
            tick_font_size_px: 11.0,
            legend_font_size_px: 11.0,
            series_stroke_width: 1.5,
            grid_stroke_width: 1.0,
            margin_left_px: 84.0,
            margin_right_px: 190.0,
            margin_top_px: 64.0,
            margin_bottom_px: 64.0,
            legend_row_height_px: 18.0,
            legend_sample_width_px: 22.0,
            palette: vec![
                Color::from_hex(0x1f77b4),
                Color::from_hex(0xff7f0e),
                Color::from_hex(0x2ca02c),
                Color::from_hex(0xd62728),
                Color::from_hex(0x9467bd),
                Color::from_hex(0x8c564b),
                Color::from_hex(0xe377c2),
                Color::from_hex(0x7f7f7f),
                Color::from_hex(0xbcbd22),
                Color::from_hex(0x17becf),
            ],
        }
    }
}

impl ChartStyle {
    /// Palette color for the series at `index`, cycling when exhausted.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.axis_color;
        }
        self.palette[index % self.palette.len()]
    }
}
