//! Attribute type codes.
//!
//! The closed set of attribute kinds a metadata export can describe. Only a
//! handful of them (boolean and the choice types) drive declaration
//! planning, but every code is modeled so that an unknown value fails at
//! load time instead of being silently skipped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Attribute type tag as exported by the metadata source.
///
/// The numeric discriminants match the codes found in metadata exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttributeTypeRepr", into = "u8")]
pub enum AttributeTypeCode {
    Boolean = 0,
    Customer = 1,
    DateTime = 2,
    Decimal = 3,
    Double = 4,
    Integer = 5,
    Lookup = 6,
    Memo = 7,
    Money = 8,
    Owner = 9,
    PartyList = 10,
    Picklist = 11,
    State = 12,
    Status = 13,
    String = 14,
    Uniqueidentifier = 15,
    CalendarRules = 16,
    Virtual = 17,
    BigInt = 18,
    ManagedProperty = 19,
    EntityName = 20,
}

impl AttributeTypeCode {
    /// All type codes in discriminant order.
    pub const ALL: [AttributeTypeCode; 21] = [
        AttributeTypeCode::Boolean,
        AttributeTypeCode::Customer,
        AttributeTypeCode::DateTime,
        AttributeTypeCode::Decimal,
        AttributeTypeCode::Double,
        AttributeTypeCode::Integer,
        AttributeTypeCode::Lookup,
        AttributeTypeCode::Memo,
        AttributeTypeCode::Money,
        AttributeTypeCode::Owner,
        AttributeTypeCode::PartyList,
        AttributeTypeCode::Picklist,
        AttributeTypeCode::State,
        AttributeTypeCode::Status,
        AttributeTypeCode::String,
        AttributeTypeCode::Uniqueidentifier,
        AttributeTypeCode::CalendarRules,
        AttributeTypeCode::Virtual,
        AttributeTypeCode::BigInt,
        AttributeTypeCode::ManagedProperty,
        AttributeTypeCode::EntityName,
    ];

    /// Returns the canonical variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeTypeCode::Boolean => "Boolean",
            AttributeTypeCode::Customer => "Customer",
            AttributeTypeCode::DateTime => "DateTime",
            AttributeTypeCode::Decimal => "Decimal",
            AttributeTypeCode::Double => "Double",
            AttributeTypeCode::Integer => "Integer",
            AttributeTypeCode::Lookup => "Lookup",
            AttributeTypeCode::Memo => "Memo",
            AttributeTypeCode::Money => "Money",
            AttributeTypeCode::Owner => "Owner",
            AttributeTypeCode::PartyList => "PartyList",
            AttributeTypeCode::Picklist => "Picklist",
            AttributeTypeCode::State => "State",
            AttributeTypeCode::Status => "Status",
            AttributeTypeCode::String => "String",
            AttributeTypeCode::Uniqueidentifier => "Uniqueidentifier",
            AttributeTypeCode::CalendarRules => "CalendarRules",
            AttributeTypeCode::Virtual => "Virtual",
            AttributeTypeCode::BigInt => "BigInt",
            AttributeTypeCode::ManagedProperty => "ManagedProperty",
            AttributeTypeCode::EntityName => "EntityName",
        }
    }

    /// Returns the numeric code used by metadata exports.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for AttributeTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeTypeCode {
    type Err = ModelError;

    /// Parse a variant name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AttributeTypeCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownTypeName(s.to_string()))
    }
}

impl TryFrom<u64> for AttributeTypeCode {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| AttributeTypeCode::ALL.get(index).copied())
            .ok_or(ModelError::UnknownTypeCode(value))
    }
}

impl From<AttributeTypeCode> for u8 {
    fn from(code: AttributeTypeCode) -> Self {
        code.code()
    }
}

/// Wire shape accepted for `Type`: either the numeric code or the variant name.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeTypeRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<AttributeTypeRepr> for AttributeTypeCode {
    type Error = ModelError;

    fn try_from(repr: AttributeTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            AttributeTypeRepr::Code(code) => AttributeTypeCode::try_from(code),
            AttributeTypeRepr::Name(name) => name.parse(),
        }
    }
}
