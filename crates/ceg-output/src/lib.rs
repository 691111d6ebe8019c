//! Artifact emission for the entity code generator.
//!
//! - **Rendering**: turns a planned [`ceg_core::Artifact`] into TypeScript source
//! - **Persistence**: writes the rendered files of a whole run in one pass

mod error;
mod typescript;
mod writer;

pub use error::{OutputError, Result};
pub use typescript::{DEFAULT_HEADER, RenderOptions, render_artifact, string_literal};
pub use writer::{OverwritePolicy, RenderedArtifact, persist, render_plan};
