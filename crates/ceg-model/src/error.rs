use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown attribute type code {0}")]
    UnknownTypeCode(u64),
    #[error("unknown attribute type '{0}'")]
    UnknownTypeName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
