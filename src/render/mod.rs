mod frame;
mod null_renderer;
mod primitives;

use std::io::Write;

pub use frame::{PrimitiveCounts, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::{LabError, LabResult};

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from datasets and argument validation. `render` is the display
/// step; backends that keep a raster can also encode the last frame as PNG.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LabResult<()>;

    fn backend_name(&self) -> &'static str;

    fn supports_png_export(&self) -> bool {
        false
    }

    /// Encodes the most recently rendered frame as PNG into `writer`.
    fn write_png(&self, writer: &mut dyn Write) -> LabResult<()> {
        let _ = writer;
        Err(LabError::UnsupportedExport {
            backend: self.backend_name(),
        })
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
