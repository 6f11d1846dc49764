use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{LabError, LabResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Number of primitives of each kind in a [`RenderFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveCounts {
    pub lines: usize,
    pub rects: usize,
    pub texts: usize,
}

impl PrimitiveCounts {
    #[must_use]
    pub fn total(self) -> usize {
        self.lines + self.rects + self.texts
    }
}

/// One chart scene in pixel space, independent of the drawing backend.
///
/// Backends paint rects first, then lines, then texts, so labels stay
/// readable over grid lines and series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push_line(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push_rect(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push_text(text);
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    /// Checks the viewport and every primitive; the error names the first
    /// offending primitive.
    pub fn validate(&self) -> LabResult<()> {
        if !self.viewport.is_valid() {
            return Err(LabError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (index, rect) in self.rects.iter().enumerate() {
            rect.validate().map_err(|err| locate("rect", index, err))?;
        }
        for (index, line) in self.lines.iter().enumerate() {
            line.validate().map_err(|err| locate("line", index, err))?;
        }
        for (index, text) in self.texts.iter().enumerate() {
            text.validate().map_err(|err| locate("text", index, err))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        PrimitiveCounts {
            lines: self.lines.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }

    /// Returns `true` when some text primitive carries exactly `text`.
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts.iter().any(|primitive| primitive.text == text)
    }
}

fn locate(kind: &str, index: usize, err: LabError) -> LabError {
    match err {
        LabError::InvalidData(message) => LabError::InvalidData(format!("{kind} #{index}: {message}")),
        other => other,
    }
}
