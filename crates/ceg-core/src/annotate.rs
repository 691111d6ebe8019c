//! Documentation comments for generated declarations.

use ceg_model::Metadata;

use crate::declaration::{Declaration, DocComment};

/// Build the doc comment describing `metadata`, if there is anything to say.
///
/// Nothing is produced when there is no display name and the logical name is
/// already the emitted identifier. Otherwise the first line is
/// `"<DisplayName> (<LogicalName>)"` (or just the logical name), followed by
/// the description when it is non-empty.
pub fn describe<M: Metadata + ?Sized>(metadata: &M) -> Option<DocComment> {
    let logical_name = metadata.logical_name();
    if metadata.display_name().is_none() && metadata.variable_name() == Some(logical_name) {
        return None;
    }

    let mut docs = match metadata.display_name() {
        Some(display_name) => DocComment::new(format!("{display_name} ({logical_name})")),
        None => DocComment::new(logical_name),
    };
    if let Some(description) = metadata.description().filter(|d| !d.is_empty()) {
        docs.push_line(description);
    }
    Some(docs)
}

/// Attach the comment produced by [`describe`] to `declaration`.
pub fn annotate<M: Metadata + ?Sized>(declaration: Declaration, metadata: &M) -> Declaration {
    match describe(metadata) {
        Some(docs) => declaration.with_docs(docs),
        None => declaration,
    }
}
