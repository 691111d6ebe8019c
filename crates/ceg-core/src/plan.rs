//! Per-attribute declaration planning.
//!
//! Decides which declaration, if any, an attribute with a discrete value set
//! turns into: an enumeration for choice types, a flag-holder for booleans.

use ceg_model::{AttributeMetadata, AttributeTypeCode, OptionMetadata};

use crate::annotate::annotate;
use crate::declaration::{
    Declaration, DocComment, EnumMember, Enumeration, FlagHolder, FlagMember,
    ensure_unique_members,
};
use crate::error::Result;
use crate::normalize::normalize_label;

/// Enumeration name used for every `State` attribute.
pub const STATE_ENUM_NAME: &str = "StateCode";

/// Enumeration name used for every `Status` attribute.
pub const STATUS_ENUM_NAME: &str = "StatusCode";

/// Display-name openings that already read as a predicate.
const PREDICATE_PREFIXES: &[&str] = &["Is ", "Are ", "Has ", "Have ", "Do ", "Does "];

/// Plan the enum or flag-holder declaration for one attribute.
///
/// Returns `Ok(None)` for attributes without options and for types that have
/// no discrete-value declaration.
///
/// # Errors
///
/// Propagates [`crate::CoreError::InvalidFallback`] when the attribute's
/// logical name cannot serve as a fallback identifier, and
/// [`crate::CoreError::DuplicateIdentifier`] when two options normalize to
/// the same member name.
pub fn plan_attribute(attribute: &AttributeMetadata) -> Result<Option<Declaration>> {
    let (Some(options), Some(attribute_type)) =
        (attribute.options.as_deref(), attribute.attribute_type)
    else {
        return Ok(None);
    };

    let declaration = match attribute_type {
        AttributeTypeCode::Picklist => {
            let name = normalize_label(
                attribute.display_name.as_deref(),
                &attribute.logical_name,
            )?;
            Some(build_enumeration(name, options)?)
        }
        AttributeTypeCode::State => Some(build_enumeration(STATE_ENUM_NAME.to_string(), options)?),
        AttributeTypeCode::Status => {
            Some(build_enumeration(STATUS_ENUM_NAME.to_string(), options)?)
        }
        AttributeTypeCode::Boolean => Some(build_flag_holder(attribute, options)?),
        AttributeTypeCode::Customer
        | AttributeTypeCode::DateTime
        | AttributeTypeCode::Decimal
        | AttributeTypeCode::Double
        | AttributeTypeCode::Integer
        | AttributeTypeCode::Lookup
        | AttributeTypeCode::Memo
        | AttributeTypeCode::Money
        | AttributeTypeCode::Owner
        | AttributeTypeCode::PartyList
        | AttributeTypeCode::String
        | AttributeTypeCode::Uniqueidentifier
        | AttributeTypeCode::CalendarRules
        | AttributeTypeCode::Virtual
        | AttributeTypeCode::BigInt
        | AttributeTypeCode::ManagedProperty
        | AttributeTypeCode::EntityName => None,
    };

    Ok(declaration.map(|d| annotate(d, attribute)))
}

/// Fallback member name for an option whose label normalizes to nothing.
pub fn option_fallback(value: i64) -> String {
    if value < 0 {
        format!("_Minus{}", value.unsigned_abs())
    } else {
        format!("_{value}")
    }
}

/// Name of the flag-holder for a boolean attribute.
pub fn flag_holder_name(attribute: &AttributeMetadata) -> Result<String> {
    let name = normalize_label(attribute.display_name.as_deref(), &attribute.logical_name)?;
    let display_name = attribute.display_name.as_deref().unwrap_or_default();
    let reads_as_predicate = PREDICATE_PREFIXES
        .iter()
        .any(|prefix| display_name.starts_with(prefix));
    if name.starts_with('_') || reads_as_predicate {
        Ok(name)
    } else {
        Ok(format!("Is{name}"))
    }
}

fn build_enumeration(name: String, options: &[OptionMetadata]) -> Result<Declaration> {
    let members = options
        .iter()
        .map(|option| {
            Ok(EnumMember {
                name: normalize_label(Some(&option.label), &option_fallback(option.value))?,
                value: option.value,
                docs: label_docs(option),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    ensure_unique_members(
        format_args!("enum {name}"),
        members.iter().map(|m| m.name.as_str()),
    )?;

    Ok(Declaration::Enumeration(Enumeration {
        name,
        members,
        exported: true,
        is_const: true,
        docs: None,
    }))
}

fn build_flag_holder(
    attribute: &AttributeMetadata,
    options: &[OptionMetadata],
) -> Result<Declaration> {
    let name = flag_holder_name(attribute)?;
    let members = options
        .iter()
        .map(|option| {
            let is_true = option.value == 1;
            let fallback = if is_true { "Yes" } else { "No" };
            Ok(FlagMember {
                name: normalize_label(Some(&option.label), fallback)?,
                value: is_true,
                docs: label_docs(option),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    ensure_unique_members(
        format_args!("class {name}"),
        members.iter().map(|m| m.name.as_str()),
    )?;

    Ok(Declaration::FlagHolder(FlagHolder {
        name,
        members,
        exported: true,
        docs: None,
    }))
}

fn label_docs(option: &OptionMetadata) -> Option<DocComment> {
    (!option.label.is_empty()).then(|| DocComment::new(option.label.as_str()))
}
