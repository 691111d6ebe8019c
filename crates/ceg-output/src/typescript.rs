//! TypeScript rendering of artifacts.

use ceg_core::{
    Artifact, Constant, Declaration, DocComment, Enumeration, FlagHolder, TypeAlias,
};

/// Default header placed at the top of every generated file.
pub const DEFAULT_HEADER: &str = "Generated by xrm-ceg from entity metadata. Do not edit by hand.";

/// Options for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Line comment placed at the top of the file.
    pub header: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }
}

/// Render one artifact as a TypeScript module.
///
/// Declarations are emitted in artifact order, separated by a blank line. An
/// artifact without declarations still renders as a module (`export {};`).
pub fn render_artifact(artifact: &Artifact, options: &RenderOptions) -> String {
    let indent = " ".repeat(options.indent_width);
    let mut blocks: Vec<String> = Vec::new();

    if let Some(header) = &options.header {
        blocks.push(format!("// {header}\n"));
    }
    if artifact.is_empty() {
        blocks.push("export {};\n".to_string());
    }
    for declaration in artifact.declarations() {
        let mut out = String::new();
        write_docs(&mut out, declaration.docs(), "");
        match declaration {
            Declaration::TypeAlias(alias) => write_type_alias(&mut out, alias, &indent),
            Declaration::Constant(constant) => write_constant(&mut out, constant),
            Declaration::Enumeration(enumeration) => {
                write_enumeration(&mut out, enumeration, &indent);
            }
            Declaration::FlagHolder(holder) => write_flag_holder(&mut out, holder, &indent),
        }
        blocks.push(out);
    }

    blocks.join("\n")
}

fn export_keyword(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

fn write_type_alias(out: &mut String, alias: &TypeAlias, indent: &str) {
    let export = export_keyword(alias.exported);
    if alias.members.is_empty() {
        out.push_str(&format!("{export}type {} = never;\n", alias.name));
        return;
    }
    out.push_str(&format!("{export}type {} =\n", alias.name));
    let last = alias.members.len() - 1;
    for (index, member) in alias.members.iter().enumerate() {
        let terminator = if index == last { ";" } else { "" };
        out.push_str(&format!("{indent}| {}{terminator}\n", string_literal(member)));
    }
}

fn write_constant(out: &mut String, constant: &Constant) {
    out.push_str(&format!(
        "{}const {} = {};\n",
        export_keyword(constant.exported),
        constant.name,
        string_literal(&constant.value)
    ));
}

fn write_enumeration(out: &mut String, enumeration: &Enumeration, indent: &str) {
    let const_keyword = if enumeration.is_const { "const " } else { "" };
    out.push_str(&format!(
        "{}{const_keyword}enum {} {{\n",
        export_keyword(enumeration.exported),
        enumeration.name
    ));
    for member in &enumeration.members {
        write_docs(out, member.docs.as_ref(), indent);
        out.push_str(&format!("{indent}{} = {},\n", member.name, member.value));
    }
    out.push_str("}\n");
}

fn write_flag_holder(out: &mut String, holder: &FlagHolder, indent: &str) {
    out.push_str(&format!(
        "{}class {} {{\n",
        export_keyword(holder.exported),
        holder.name
    ));
    for member in &holder.members {
        write_docs(out, member.docs.as_ref(), indent);
        out.push_str(&format!(
            "{indent}public static readonly {} = {};\n",
            member.name, member.value
        ));
    }
    out.push_str("}\n");
}

fn write_docs(out: &mut String, docs: Option<&DocComment>, indent: &str) {
    let Some(docs) = docs else {
        return;
    };
    out.push_str(&format!("{indent}/**\n"));
    for line in docs.lines() {
        let line = line.trim_end().replace("*/", "*\\/");
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
}

/// Double-quoted TypeScript string literal.
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use ceg_core::{ArtifactKind, EnumMember, FlagMember};

    use super::*;

    fn no_header() -> RenderOptions {
        RenderOptions {
            header: None,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("name"), "\"name\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_empty_artifact_is_still_a_module() {
        let artifact = Artifact::new(ArtifactKind::Enums, "Account");
        assert_eq!(
            render_artifact(&artifact, &RenderOptions::default()),
            format!("// {DEFAULT_HEADER}\n\nexport {{}};\n")
        );
    }

    #[test]
    fn test_empty_field_union_is_never() {
        let mut artifact = Artifact::new(ArtifactKind::Constants, "Empty");
        artifact
            .push(Declaration::TypeAlias(TypeAlias {
                name: "Field".to_string(),
                members: vec![],
                exported: true,
                docs: None,
            }))
            .unwrap();
        assert_eq!(
            render_artifact(&artifact, &no_header()),
            "export type Field = never;\n"
        );
    }

    #[test]
    fn test_enum_rendering() {
        let mut artifact = Artifact::new(ArtifactKind::Enums, "Lead");
        artifact
            .push(Declaration::Enumeration(Enumeration {
                name: "LeadQuality".to_string(),
                members: vec![
                    EnumMember {
                        name: "Hot".to_string(),
                        value: 1,
                        docs: Some(DocComment::new("Hot")),
                    },
                    EnumMember {
                        name: "_2".to_string(),
                        value: 2,
                        docs: None,
                    },
                ],
                exported: true,
                is_const: true,
                docs: None,
            }))
            .unwrap();
        let expected = "\
export const enum LeadQuality {
    /**
     * Hot
     */
    Hot = 1,
    _2 = 2,
}
";
        assert_eq!(render_artifact(&artifact, &no_header()), expected);
    }

    #[test]
    fn test_flag_holder_rendering_with_two_space_indent() {
        let mut artifact = Artifact::new(ArtifactKind::Enums, "Contact");
        artifact
            .push(
                Declaration::FlagHolder(FlagHolder {
                    name: "IsActive".to_string(),
                    members: vec![
                        FlagMember {
                            name: "Yes".to_string(),
                            value: true,
                            docs: None,
                        },
                        FlagMember {
                            name: "No".to_string(),
                            value: false,
                            docs: None,
                        },
                    ],
                    exported: true,
                    docs: None,
                })
                .with_docs(DocComment::new("Active (isactive)")),
            )
            .unwrap();
        let options = RenderOptions {
            indent_width: 2,
            header: None,
        };
        let expected = "\
/**
 * Active (isactive)
 */
export class IsActive {
  public static readonly Yes = true;
  public static readonly No = false;
}
";
        assert_eq!(render_artifact(&artifact, &options), expected);
    }

    #[test]
    fn test_blank_doc_lines_keep_the_star_column() {
        let mut out = String::new();
        let docs = DocComment::new("Notes (notes)\n\nSecond paragraph");
        write_docs(&mut out, Some(&docs), "  ");
        assert_eq!(
            out,
            "  /**\n   * Notes (notes)\n   *\n   * Second paragraph\n   */\n"
        );
    }

    #[test]
    fn test_doc_lines_cannot_close_the_comment() {
        let mut out = String::new();
        let mut docs = DocComment::new("Notes (notes)");
        docs.push_line("Ends early */ oops");
        write_docs(&mut out, Some(&docs), "");
        assert_eq!(
            out,
            "/**\n * Notes (notes)\n * Ends early *\\/ oops\n */\n"
        );
    }
}
