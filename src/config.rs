use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};

pub const DATASETS_DIR_NAME: &str = "datasets";
pub const OUTPUTS_DIR_NAME: &str = "outputs_charts";

/// Filesystem layout of one analysis workspace.
///
/// The value is passed explicitly to whatever needs a path; nothing in the
/// crate reads a process-wide location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabPaths {
    pub root_dir: PathBuf,
    pub datasets_dir: PathBuf,
    pub outputs_dir: PathBuf,
}

impl LabPaths {
    /// Derives `datasets/` and `outputs_charts/` under `root_dir`.
    #[must_use]
    pub fn from_root(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        Self {
            datasets_dir: root_dir.join(DATASETS_DIR_NAME),
            outputs_dir: root_dir.join(OUTPUTS_DIR_NAME),
            root_dir,
        }
    }

    /// Overrides the output directory, keeping root and datasets.
    #[must_use]
    pub fn with_outputs_dir(mut self, outputs_dir: impl Into<PathBuf>) -> Self {
        self.outputs_dir = outputs_dir.into();
        self
    }

    #[must_use]
    pub fn dataset_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.datasets_dir.join(file_name)
    }

    #[must_use]
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.outputs_dir.join(file_name)
    }

    pub fn from_json_str(input: &str) -> LabResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LabError::InvalidData(format!("failed to parse paths config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> LabResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LabError::InvalidData(format!("failed to serialize paths config json: {e}"))
        })
    }

    /// Reads a JSON paths file from disk.
    pub fn load(path: impl AsRef<Path>) -> LabResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| LabError::filesystem(path, e))?;
        Self::from_json_str(&raw)
    }
}
