pub mod attribute_type;
pub mod config;
pub mod error;
pub mod metadata;

pub use attribute_type::AttributeTypeCode;
pub use config::{CONSTANTS_DIR, ENUMS_DIR, GeneratorConfig};
pub use error::{ModelError, Result};
pub use metadata::{AttributeMetadata, EntityMetadata, Metadata, OptionMetadata};
