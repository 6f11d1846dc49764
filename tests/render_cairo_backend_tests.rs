#![cfg(feature = "cairo-backend")]

mod common;

use produce_lab::LabError;
use produce_lab::core::Viewport;
use produce_lab::render::{
    CairoRenderer, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};
use produce_lab::{ActualsPlotRequest, CaseCharts, LabPaths, Measurement, ProductType};

use common::{PNG_SIGNATURE, wide_table};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, LabError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_primitive_kind() {
    let mut renderer = CairoRenderer::new(400, 300).expect("renderer");
    let frame = RenderFrame::new(Viewport::new(400, 300))
        .with_rect(
            RectPrimitive::new(10.0, 10.0, 380.0, 280.0, Color::rgb(0.95, 0.95, 0.95))
                .with_border(1.0, Color::rgb(0.2, 0.2, 0.2)),
        )
        .with_line(LinePrimitive::new(
            20.0,
            250.0,
            380.0,
            40.0,
            1.5,
            Color::rgb(0.1, 0.4, 0.8),
        ))
        .with_line(
            LinePrimitive::new(20.0, 40.0, 380.0, 250.0, 1.5, Color::rgb(0.9, 0.4, 0.1))
                .with_stroke_style(LineStrokeStyle::Dashed),
        )
        .with_text(TextPrimitive::new(
            "AveragePrice",
            200.0,
            12.0,
            12.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Center,
        ));

    renderer.render(&frame).expect("render");
    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.texts_drawn, 1);
}

#[test]
fn cairo_renderer_resizes_to_frame_viewport() {
    let mut renderer = CairoRenderer::new(100, 100).expect("renderer");
    renderer
        .render(&RenderFrame::new(Viewport::new(320, 200)))
        .expect("render");
    assert_eq!(renderer.surface().width(), 320);
    assert_eq!(renderer.surface().height(), 200);
}

#[test]
fn cairo_renderer_encodes_png() {
    let mut renderer = CairoRenderer::new(64, 48).expect("renderer");
    renderer
        .render(&RenderFrame::new(Viewport::new(64, 48)))
        .expect("render");

    let mut bytes = Vec::new();
    renderer.write_png(&mut bytes).expect("png");
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[test]
fn saved_actuals_chart_is_a_real_png() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let renderer = CairoRenderer::new(1200, 600).expect("renderer");
    let mut charts = CaseCharts::new(renderer, LabPaths::from_root(tmp.path()));

    let request = ActualsPlotRequest::new(Measurement::AveragePrice, ProductType::Organic)
        .with_save_plot(true);
    let output = charts.plot_actuals(&wide_table(), request).expect("plot");

    let path = output.saved_path.expect("saved");
    let file = std::fs::File::open(&path).expect("open");
    let surface = cairo::ImageSurface::create_from_png(&mut std::io::BufReader::new(file))
        .expect("decode png");
    assert_eq!(surface.width(), 1200);
    assert_eq!(surface.height(), 600);
    assert!(charts.renderer().last_stats().lines_drawn > 0);
}
