//! Chart operations over produce datasets.
//!
//! Every operation validates its inputs first, then builds a [`LineChart`],
//! hands the frame to the renderer and optionally writes a PNG artifact into
//! the configured outputs directory. Nothing is drawn or written once a
//! check fails.

mod actuals;
mod evaluation;
mod forecast;
mod line_chart;
mod requests;
mod style;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use actuals::{DATE_COLUMN, REGION_COLUMN, TYPE_COLUMN};
pub use line_chart::{ChartSeries, LineChart};
pub use requests::{ActualsPlotRequest, ModelPlotRequest};
pub use style::ChartStyle;

use crate::config::LabPaths;
use crate::core::Viewport;
use crate::error::{LabError, LabResult};
use crate::render::{RenderFrame, Renderer};

/// Result of one successful chart call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutput {
    pub title: String,
    pub frame: RenderFrame,
    pub saved_path: Option<PathBuf>,
}

/// Chart façade owning a renderer and the workspace paths.
#[derive(Debug)]
pub struct CaseCharts<R: Renderer> {
    renderer: R,
    paths: LabPaths,
    viewport: Viewport,
    style: ChartStyle,
}

impl<R: Renderer> CaseCharts<R> {
    #[must_use]
    pub fn new(renderer: R, paths: LabPaths) -> Self {
        Self {
            renderer,
            paths,
            viewport: Viewport::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn paths(&self) -> &LabPaths {
        &self.paths
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Builds and renders `chart`, then writes it as `save_as` when given.
    fn emit(&mut self, chart: &LineChart, save_as: Option<String>) -> LabResult<ChartOutput> {
        if save_as.is_some() && !self.renderer.supports_png_export() {
            return Err(LabError::UnsupportedExport {
                backend: self.renderer.backend_name(),
            });
        }

        let frame = chart.build_frame(self.viewport, &self.style)?;
        self.renderer.render(&frame)?;

        let saved_path = match save_as {
            Some(file_name) => Some(write_png_artifact(
                &self.renderer,
                &self.paths.outputs_dir,
                &file_name,
            )?),
            None => None,
        };

        debug!(
            title = %chart.title,
            series = chart.series.len(),
            points = chart.point_count(),
            saved = ?saved_path,
            "rendered chart"
        );
        Ok(ChartOutput {
            title: chart.title.clone(),
            frame,
            saved_path,
        })
    }
}

/// Writes the renderer's last frame to `outputs_dir/file_name`.
///
/// The PNG is encoded into a hidden sibling file and renamed over the target,
/// so a failed save leaves any previous artifact with that name intact.
fn write_png_artifact<R: Renderer>(
    renderer: &R,
    outputs_dir: &Path,
    file_name: &str,
) -> LabResult<PathBuf> {
    fs::create_dir_all(outputs_dir).map_err(|e| LabError::filesystem(outputs_dir, e))?;
    let path = outputs_dir.join(file_name);
    let staging = outputs_dir.join(format!(".{file_name}.partial"));

    let written = encode_png(renderer, &staging)
        .and_then(|()| fs::rename(&staging, &path).map_err(|e| LabError::filesystem(&path, e)));
    if let Err(err) = written {
        match fs::remove_file(&staging) {
            Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => {
                warn!(path = %staging.display(), error = %cleanup, "failed to remove partial artifact");
            }
            _ => {}
        }
        return Err(err);
    }
    Ok(path)
}

fn encode_png<R: Renderer>(renderer: &R, path: &Path) -> LabResult<()> {
    let file = File::create(path).map_err(|e| LabError::filesystem(path, e))?;
    let mut writer = BufWriter::new(file);
    renderer.write_png(&mut writer)?;
    writer.flush().map_err(|e| LabError::filesystem(path, e))
}
