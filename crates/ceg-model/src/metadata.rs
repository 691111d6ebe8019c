//! Entity, attribute and option metadata.
//!
//! These records are read once per run and never mutated. Field names on the
//! wire are PascalCase, matching metadata exports.

use serde::{Deserialize, Deserializer, Serialize};

use crate::attribute_type::AttributeTypeCode;

/// Descriptive fields shared by entities and attributes.
pub trait Metadata {
    /// Stable machine key. Never empty.
    fn logical_name(&self) -> &str;

    /// Pre-chosen identifier override, if any.
    fn variable_name(&self) -> Option<&str>;

    /// Human-readable label.
    fn display_name(&self) -> Option<&str>;

    /// Free-text description.
    fn description(&self) -> Option<&str>;
}

/// Metadata for one entity; produces one constants and one enums artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityMetadata {
    pub logical_name: String,
    #[serde(default)]
    pub variable_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeMetadata>,
}

impl EntityMetadata {
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            variable_name: None,
            display_name: None,
            description: None,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeMetadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Attributes that carry a discrete value set.
    pub fn option_attributes(&self) -> impl Iterator<Item = &AttributeMetadata> {
        self.attributes.iter().filter(|a| a.options.is_some())
    }
}

impl Metadata for EntityMetadata {
    fn logical_name(&self) -> &str {
        &self.logical_name
    }

    fn variable_name(&self) -> Option<&str> {
        self.variable_name.as_deref()
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Metadata for one attribute (field) of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeMetadata {
    pub logical_name: String,
    /// Emitted verbatim as the constant identifier; never normalized.
    pub variable_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "Type", default)]
    pub attribute_type: Option<AttributeTypeCode>,
    #[serde(default)]
    pub options: Option<Vec<OptionMetadata>>,
}

impl AttributeMetadata {
    pub fn new(logical_name: impl Into<String>, variable_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            variable_name: variable_name.into(),
            display_name: None,
            description: None,
            attribute_type: None,
            options: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, attribute_type: AttributeTypeCode) -> Self {
        self.attribute_type = Some(attribute_type);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<OptionMetadata>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn option_count(&self) -> usize {
        self.options.as_ref().map_or(0, Vec::len)
    }
}

impl Metadata for AttributeMetadata {
    fn logical_name(&self) -> &str {
        &self.logical_name
    }

    fn variable_name(&self) -> Option<&str> {
        Some(&self.variable_name)
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// One discrete value of a choice or boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionMetadata {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    pub value: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl OptionMetadata {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
