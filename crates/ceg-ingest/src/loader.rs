//! Metadata document loading.
//!
//! A metadata document is JSON holding an ordered list of entities, either as
//! the root array or under a `default` key:
//!
//! ```json
//! [{ "LogicalName": "account", "DisplayName": "Account", "Attributes": [] }]
//! { "default": [{ "LogicalName": "account", "Attributes": [] }] }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use ceg_model::EntityMetadata;
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Origin reported for documents that did not come from a file.
pub const INLINE_ORIGIN: &str = "<inline>";

#[derive(Deserialize)]
struct ModuleDocument {
    default: Vec<EntityMetadata>,
}

/// Loads the entity list from a metadata file.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use ceg_ingest::load_metadata;
///
/// let entities = load_metadata(Path::new("metadata/entities.json"))?;
/// for entity in &entities {
///     println!("{} has {} attributes", entity.logical_name, entity.attributes.len());
/// }
/// ```
pub fn load_metadata(path: &Path) -> Result<Vec<EntityMetadata>> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let entities = parse_document(&text, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        entity_count = entities.len(),
        attribute_count = entities.iter().map(|e| e.attributes.len()).sum::<usize>(),
        "metadata loaded"
    );
    Ok(entities)
}

/// Parses a metadata document held in memory.
pub fn parse_metadata(text: &str) -> Result<Vec<EntityMetadata>> {
    parse_document(text, INLINE_ORIGIN)
}

fn parse_document(text: &str, origin: &str) -> Result<Vec<EntityMetadata>> {
    let parse_error = |source| IngestError::Parse {
        origin: origin.to_string(),
        source,
    };

    let entities = if text.trim_start().starts_with('{') {
        serde_json::from_str::<ModuleDocument>(text)
            .map_err(parse_error)?
            .default
    } else {
        serde_json::from_str::<Vec<EntityMetadata>>(text).map_err(parse_error)?
    };

    validate(&entities, origin)?;
    Ok(entities)
}

/// Rejects records whose keys cannot be used downstream.
fn validate(entities: &[EntityMetadata], origin: &str) -> Result<()> {
    let invalid = |field, value: &str, record| IngestError::InvalidValue {
        field,
        value: value.to_string(),
        record,
        origin: origin.to_string(),
    };

    for (index, entity) in entities.iter().enumerate() {
        if entity.logical_name.trim().is_empty() {
            return Err(invalid(
                "LogicalName",
                &entity.logical_name,
                format!("entity #{index}"),
            ));
        }
        for (attr_index, attribute) in entity.attributes.iter().enumerate() {
            if attribute.logical_name.trim().is_empty() {
                return Err(invalid(
                    "LogicalName",
                    &attribute.logical_name,
                    format!("attribute #{attr_index} of entity '{}'", entity.logical_name),
                ));
            }
            if attribute.variable_name.trim().is_empty() {
                return Err(invalid(
                    "VariableName",
                    &attribute.variable_name,
                    format!(
                        "attribute '{}' of entity '{}'",
                        attribute.logical_name, entity.logical_name
                    ),
                ));
            }
        }
    }
    Ok(())
}
