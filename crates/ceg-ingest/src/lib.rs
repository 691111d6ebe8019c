//! Metadata ingestion: reads entity metadata documents into memory.

pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{INLINE_ORIGIN, load_metadata, parse_metadata};
