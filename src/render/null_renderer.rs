use crate::error::LabResult;
use crate::render::{PrimitiveCounts, RenderFrame, Renderer};

/// Headless backend: validates frames and keeps counters, draws nothing and
/// cannot export images.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_counts: PrimitiveCounts,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LabResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_counts = frame.counts();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "null"
    }
}
