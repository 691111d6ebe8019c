//! Declaration planning for generated entity sources.
//!
//! Turns entity metadata into per-entity artifacts made of type aliases,
//! constants, enumerations and boolean flag-holders:
//!
//! - [`normalize_label`] derives legal identifiers from human labels
//! - [`plan_attribute`] decides the declaration for one option-bearing attribute
//! - [`annotate`] attaches the doc comment describing a metadata record
//! - [`generate_all`] runs the whole set of entities and returns a [`GenerationPlan`]
//!
//! Nothing in this crate performs I/O; rendering and persisting artifacts is
//! left to the caller.

pub mod annotate;
pub mod declaration;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod plan;

pub use annotate::{annotate, describe};
pub use declaration::{
    ARTIFACT_EXTENSION, Artifact, ArtifactKind, Constant, Declaration, DeclarationKind,
    DocComment, EnumMember, Enumeration, FlagHolder, FlagMember, TypeAlias,
};
pub use error::{CoreError, Result};
pub use generate::{
    EntityArtifacts, FIELD_TYPE_NAME, GenerationPlan, entity_name, generate_all, generate_entity,
};
pub use normalize::{is_legal_identifier, normalize_label};
pub use plan::{
    STATE_ENUM_NAME, STATUS_ENUM_NAME, flag_holder_name, option_fallback, plan_attribute,
};
