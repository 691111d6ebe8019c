//! Run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Sub-folder (under the output root) receiving the constants artifacts.
pub const CONSTANTS_DIR: &str = "constants";

/// Sub-folder (under the output root) receiving the enums artifacts.
pub const ENUMS_DIR: &str = "enums";

/// Where metadata is read from and where generated sources are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Metadata document path.
    pub input: PathBuf,
    /// Output root; artifacts land in its `constants/` and `enums/` folders.
    pub output_folder: PathBuf,
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_folder: output_folder.into(),
        }
    }

    /// Resolve relative paths against `base` (typically the config file's folder).
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        if self.input.is_relative() {
            self.input = base.join(&self.input);
        }
        if self.output_folder.is_relative() {
            self.output_folder = base.join(&self.output_folder);
        }
        self
    }
}
