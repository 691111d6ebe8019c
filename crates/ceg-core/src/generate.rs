//! Entity-level generation.
//!
//! Each entity yields two artifacts: constants (the `Field` union plus one
//! constant per attribute) and enums (one declaration per option-bearing
//! attribute that plans to something). Entities are processed in input order
//! and share no state beyond the artifact-name collision check.

use std::collections::BTreeMap;

use ceg_model::{EntityMetadata, Metadata};
use tracing::{debug, info, info_span};

use crate::annotate::annotate;
use crate::declaration::{
    Artifact, ArtifactKind, Constant, Declaration, DeclarationKind, TypeAlias,
};
use crate::error::{CoreError, Result};
use crate::normalize::{is_legal_identifier, normalize_label};
use crate::plan::plan_attribute;

/// Name of the string-literal union listing every field of an entity.
pub const FIELD_TYPE_NAME: &str = "Field";

/// Both artifacts produced for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityArtifacts {
    pub logical_name: String,
    pub display_name: Option<String>,
    /// Normalized entity name, used as the base file name of both artifacts.
    pub name: String,
    pub constants: Artifact,
    pub enums: Artifact,
}

impl EntityArtifacts {
    pub fn artifacts(&self) -> [&Artifact; 2] {
        [&self.constants, &self.enums]
    }

    /// Number of per-attribute field constants.
    pub fn field_count(&self) -> usize {
        self.constants.count(DeclarationKind::Constant)
    }

    pub fn enum_count(&self) -> usize {
        self.enums.count(DeclarationKind::Enumeration)
    }

    pub fn flag_holder_count(&self) -> usize {
        self.enums.count(DeclarationKind::FlagHolder)
    }
}

/// Everything generated for one run, ready to be rendered and persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    pub entities: Vec<EntityArtifacts>,
}

impl GenerationPlan {
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.entities.iter().flat_map(|e| e.artifacts())
    }

    pub fn artifact_count(&self) -> usize {
        self.entities.len() * 2
    }
}

/// Entity artifact name: normalized display name, falling back to the logical name.
pub fn entity_name(entity: &EntityMetadata) -> Result<String> {
    normalize_label(entity.display_name.as_deref(), &entity.logical_name)
}

/// Generate the artifacts of every entity, in input order.
///
/// # Errors
///
/// Fails on the first entity that cannot be generated, and with
/// [`CoreError::ArtifactCollision`] when two entities share an artifact name
/// (compared case-insensitively, since output may land on a case-insensitive
/// file system).
pub fn generate_all(entities: &[EntityMetadata]) -> Result<GenerationPlan> {
    let mut plan = GenerationPlan::default();
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();

    for entity in entities {
        let generated = generate_entity(entity)?;
        let key = generated.name.to_ascii_lowercase();
        if let Some(first) = claimed.get(&key) {
            return Err(CoreError::ArtifactCollision {
                name: generated.name,
                first: first.clone(),
                second: entity.logical_name.clone(),
            });
        }
        claimed.insert(key, entity.logical_name.clone());
        plan.entities.push(generated);
    }

    info!(
        entity_count = plan.entities.len(),
        artifact_count = plan.artifact_count(),
        "generation complete"
    );
    Ok(plan)
}

/// Generate the constants and enums artifacts for one entity.
pub fn generate_entity(entity: &EntityMetadata) -> Result<EntityArtifacts> {
    let span = info_span!("generate", entity = %entity.logical_name);
    let _guard = span.enter();
    info!(
        display_name = entity.display_name.as_deref().unwrap_or_default(),
        "generating code"
    );

    let name = entity_name(entity)?;
    let constants = generate_constants(entity, &name)?;
    let enums = generate_enums(entity, &name)?;

    let generated = EntityArtifacts {
        logical_name: entity.logical_name.clone(),
        display_name: entity.display_name.clone(),
        name,
        constants,
        enums,
    };
    info!(
        artifact = %generated.name,
        fields = generated.field_count(),
        enums = generated.enum_count(),
        flag_holders = generated.flag_holder_count(),
        "code generation finished"
    );
    Ok(generated)
}

fn generate_constants(entity: &EntityMetadata, name: &str) -> Result<Artifact> {
    debug!("generating constants");
    let mut artifact = Artifact::new(ArtifactKind::Constants, name);

    let field_type = Declaration::TypeAlias(TypeAlias {
        name: FIELD_TYPE_NAME.to_string(),
        members: entity
            .attributes
            .iter()
            .map(|a| a.logical_name.clone())
            .collect(),
        exported: true,
        docs: None,
    });
    artifact.push(annotate(field_type, entity))?;

    for attribute in &entity.attributes {
        if !is_legal_identifier(&attribute.variable_name) {
            return Err(CoreError::InvalidVariableName {
                logical_name: attribute.logical_name.clone(),
                variable_name: attribute.variable_name.clone(),
            });
        }
        let constant = Declaration::Constant(Constant {
            name: attribute.variable_name.clone(),
            value: attribute.logical_name.clone(),
            exported: true,
            docs: None,
        });
        artifact.push(annotate(constant, attribute))?;
    }

    Ok(artifact)
}

fn generate_enums(entity: &EntityMetadata, name: &str) -> Result<Artifact> {
    debug!("generating enums");
    let mut artifact = Artifact::new(ArtifactKind::Enums, name);

    for attribute in entity.option_attributes() {
        debug!(
            attribute = attribute.logical_name(),
            display_name = attribute.display_name().unwrap_or_default(),
            attribute_type = ?attribute.attribute_type,
            options = attribute.option_count(),
            "processing attribute"
        );
        if let Some(declaration) = plan_attribute(attribute)? {
            debug!(
                declaration = declaration.name(),
                kind = %declaration.kind(),
                "planned declaration"
            );
            artifact.push(declaration)?;
        }
    }

    Ok(artifact)
}
