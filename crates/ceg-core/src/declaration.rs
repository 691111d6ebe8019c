//! Declarations collected for one generated artifact.
//!
//! Generation never touches a mutable syntax tree. It appends immutable
//! declaration values to an [`Artifact`], and a renderer turns the finished
//! list into source text in one pass.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use ceg_model::{CONSTANTS_DIR, ENUMS_DIR};

use crate::error::{CoreError, Result};

/// File extension of generated artifacts.
pub const ARTIFACT_EXTENSION: &str = "ts";

/// Documentation text attached to a declaration or member.
///
/// May span several lines; renderers emit one comment line per text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment(String);

impl DocComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Append a line to the comment.
    pub fn push_line(&mut self, line: &str) {
        self.0.push('\n');
        self.0.push_str(line);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

/// Union of string literals, e.g. `type Field = "name" | "statuscode"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub members: Vec<String>,
    pub exported: bool,
    pub docs: Option<DocComment>,
}

/// Constant bound to a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: String,
    pub exported: bool,
    pub docs: Option<DocComment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
    pub docs: Option<DocComment>,
}

/// Enumeration with explicit integer values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub exported: bool,
    /// Inlined at compile time (`const enum`).
    pub is_const: bool,
    pub docs: Option<DocComment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMember {
    pub name: String,
    pub value: bool,
    pub docs: Option<DocComment>,
}

/// Container of static read-only boolean members, one per boolean option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagHolder {
    pub name: String,
    pub members: Vec<FlagMember>,
    pub exported: bool,
    pub docs: Option<DocComment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    TypeAlias,
    Constant,
    Enumeration,
    FlagHolder,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::TypeAlias => "type",
            DeclarationKind::Constant => "const",
            DeclarationKind::Enumeration => "enum",
            DeclarationKind::FlagHolder => "class",
        }
    }

    /// Whether the name is bound in the type namespace.
    fn declares_type(&self) -> bool {
        !matches!(self, DeclarationKind::Constant)
    }

    /// Whether the name is bound in the value namespace.
    fn declares_value(&self) -> bool {
        !matches!(self, DeclarationKind::TypeAlias)
    }

    fn conflicts_with(&self, other: DeclarationKind) -> bool {
        (self.declares_type() && other.declares_type())
            || (self.declares_value() && other.declares_value())
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    TypeAlias(TypeAlias),
    Constant(Constant),
    Enumeration(Enumeration),
    FlagHolder(FlagHolder),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::TypeAlias(d) => &d.name,
            Declaration::Constant(d) => &d.name,
            Declaration::Enumeration(d) => &d.name,
            Declaration::FlagHolder(d) => &d.name,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::TypeAlias(_) => DeclarationKind::TypeAlias,
            Declaration::Constant(_) => DeclarationKind::Constant,
            Declaration::Enumeration(_) => DeclarationKind::Enumeration,
            Declaration::FlagHolder(_) => DeclarationKind::FlagHolder,
        }
    }

    pub fn docs(&self) -> Option<&DocComment> {
        match self {
            Declaration::TypeAlias(d) => d.docs.as_ref(),
            Declaration::Constant(d) => d.docs.as_ref(),
            Declaration::Enumeration(d) => d.docs.as_ref(),
            Declaration::FlagHolder(d) => d.docs.as_ref(),
        }
    }

    /// Attach (or replace) the declaration's documentation comment.
    #[must_use]
    pub fn with_docs(mut self, docs: DocComment) -> Self {
        let slot = match &mut self {
            Declaration::TypeAlias(d) => &mut d.docs,
            Declaration::Constant(d) => &mut d.docs,
            Declaration::Enumeration(d) => &mut d.docs,
            Declaration::FlagHolder(d) => &mut d.docs,
        };
        *slot = Some(docs);
        self
    }
}

/// Which of an entity's two artifacts a declaration list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Constants,
    Enums,
}

impl ArtifactKind {
    /// Sub-folder under the output root.
    pub fn dir(&self) -> &'static str {
        match self {
            ArtifactKind::Constants => CONSTANTS_DIR,
            ArtifactKind::Enums => ENUMS_DIR,
        }
    }
}

/// One source file to be emitted, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Base file name, without extension.
    pub name: String,
    declarations: Vec<Declaration>,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    /// Path relative to the output root, e.g. `enums/Account.ts`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.kind.dir()).join(format!("{}.{ARTIFACT_EXTENSION}", self.name))
    }

    /// Append a declaration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateIdentifier`] if a declaration with the
    /// same name already occupies the same namespace.
    pub fn push(&mut self, declaration: Declaration) -> Result<()> {
        let kind = declaration.kind();
        let clash = self
            .declarations
            .iter()
            .any(|d| d.name() == declaration.name() && d.kind().conflicts_with(kind));
        if clash {
            return Err(CoreError::DuplicateIdentifier {
                scope: self.relative_path().display().to_string(),
                name: declaration.name().to_string(),
            });
        }
        self.declarations.push(declaration);
        Ok(())
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn count(&self, kind: DeclarationKind) -> usize {
        self.declarations.iter().filter(|d| d.kind() == kind).count()
    }
}

/// Fails on the first member name seen twice within one declaration.
pub(crate) fn ensure_unique_members<'a>(
    scope: impl fmt::Display,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CoreError::DuplicateIdentifier {
                scope: scope.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
