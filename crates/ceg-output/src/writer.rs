//! Persisting rendered artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use ceg_core::{Artifact, GenerationPlan};
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::typescript::{RenderOptions, render_artifact};

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace existing files.
    #[default]
    Overwrite,
    /// Abort before writing anything if any target exists.
    Fail,
}

/// Source text of one artifact, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub relative_path: PathBuf,
    pub contents: String,
}

impl RenderedArtifact {
    pub fn from_artifact(artifact: &Artifact, options: &RenderOptions) -> Self {
        Self {
            relative_path: artifact.relative_path(),
            contents: render_artifact(artifact, options),
        }
    }
}

/// Render every artifact of the plan, constants before enums for each entity.
pub fn render_plan(plan: &GenerationPlan, options: &RenderOptions) -> Vec<RenderedArtifact> {
    plan.artifacts()
        .map(|artifact| RenderedArtifact::from_artifact(artifact, options))
        .collect()
}

/// Write all rendered artifacts under `output_root` in one pass.
///
/// With [`OverwritePolicy::Fail`], every target is checked before the first
/// write, so a refused run leaves the output untouched.
///
/// # Errors
///
/// Returns [`OutputError`] for an existing file under the `Fail` policy, or
/// for any directory creation or write failure. Files written before a write
/// failure are left in place.
pub fn persist(
    rendered: &[RenderedArtifact],
    output_root: &Path,
    policy: OverwritePolicy,
) -> Result<Vec<PathBuf>> {
    if policy == OverwritePolicy::Fail {
        for artifact in rendered {
            let path = output_root.join(&artifact.relative_path);
            if path.exists() {
                return Err(OutputError::AlreadyExists { path });
            }
        }
    }

    let mut written = Vec::with_capacity(rendered.len());
    for artifact in rendered {
        let path = output_root.join(&artifact.relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &artifact.contents).map_err(|source| OutputError::WriteFile {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "wrote artifact");
        written.push(path);
    }

    info!(
        output_root = %output_root.display(),
        file_count = written.len(),
        "artifacts persisted"
    );
    Ok(written)
}
