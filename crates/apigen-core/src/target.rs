//! Target-syntax nodes and the C# pretty-printer
//!
//! Emission builds [`TargetNode`]s first; only [`CSharpPrinter`] knows about
//! braces, indentation and doc-comment markup.

/// One piece of generated output
#[derive(Debug, Clone, PartialEq)]
pub enum TargetNode {
    /// Summary doc comment, one entry per line, already escaped
    DocComment(Vec<String>),
    /// `[Name]` or `[Name("argument")]`
    Attribute {
        name: String,
        argument: Option<String>,
    },
    /// Enum declaration; `members` holds member nodes and their leading docs
    EnumDecl {
        name: String,
        members: Vec<TargetNode>,
    },
    /// Enum member with an optional explicit value
    Member {
        name: String,
        value: Option<String>,
    },
}

impl TargetNode {
    pub fn attribute<S: Into<String>>(name: S) -> Self {
        Self::Attribute {
            name: name.into(),
            argument: None,
        }
    }

    pub fn attribute_with_argument<S: Into<String>, A: Into<String>>(name: S, argument: A) -> Self {
        Self::Attribute {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }
}

/// Renders nodes as C# source
#[derive(Debug, Clone)]
pub struct CSharpPrinter {
    indent_unit: String,
}

impl CSharpPrinter {
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    pub fn with_indent<S: Into<String>>(indent_unit: S) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    /// Render a sequence of nodes; every line ends with `\n`
    pub fn print(&self, nodes: &[TargetNode], depth: usize) -> String {
        let mut lines = Vec::new();
        for node in nodes {
            self.push_lines(node, depth, &mut lines);
        }
        lines.into_iter().map(|line| line + "\n").collect()
    }

    /// Render a single node without a trailing newline
    pub fn render(&self, node: &TargetNode, depth: usize) -> String {
        let mut lines = Vec::new();
        self.push_lines(node, depth, &mut lines);
        lines.join("\n")
    }

    fn push_lines(&self, node: &TargetNode, depth: usize, lines: &mut Vec<String>) {
        let indent = self.indent(depth);

        match node {
            TargetNode::DocComment(text) => {
                let count = text.len();
                for (index, line) in text.iter().enumerate() {
                    let open = if index == 0 { "<summary>" } else { "" };
                    let close = if index + 1 == count { "</summary>" } else { "" };
                    lines.push(format!("{}/// {}{}{}", indent, open, line, close));
                }
            }
            TargetNode::Attribute { name, argument } => match argument {
                Some(argument) => lines.push(format!(
                    "{}[{}(\"{}\")]",
                    indent,
                    name,
                    escape_string_literal(argument)
                )),
                None => lines.push(format!("{}[{}]", indent, name)),
            },
            TargetNode::EnumDecl { name, members } => {
                lines.push(format!("{}public enum {} {{", indent, name));
                for member in members {
                    self.push_lines(member, depth + 1, lines);
                }
                lines.push(format!("{}}}", indent));
            }
            TargetNode::Member { name, value } => match value {
                Some(value) => lines.push(format!("{}{} = {},", indent, name, value)),
                None => lines.push(format!("{}{},", indent, name)),
            },
        }
    }
}

impl Default for CSharpPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_string_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_comment_lines() {
        let printer = CSharpPrinter::new();
        let node = TargetNode::DocComment(vec!["Line one.".to_string(), "Line two.".to_string()]);
        assert_eq!(
            printer.render(&node, 1),
            "\t/// <summary>Line one.\n\t/// Line two.</summary>"
        );

        let single = TargetNode::DocComment(vec!["Only.".to_string()]);
        assert_eq!(printer.render(&single, 0), "/// <summary>Only.</summary>");
    }

    #[test]
    fn test_attributes() {
        let printer = CSharpPrinter::new();
        assert_eq!(printer.render(&TargetNode::attribute("Flags"), 1), "\t[Flags]");
        assert_eq!(
            printer.render(&TargetNode::attribute_with_argument("Obsolete", "use \"Foo\""), 0),
            "[Obsolete(\"use \\\"Foo\\\"\")]"
        );
    }

    #[test]
    fn test_enum_declaration() {
        let printer = CSharpPrinter::with_indent("    ");
        let node = TargetNode::EnumDecl {
            name: "TextAlign".to_string(),
            members: vec![
                TargetNode::Member { name: "XLeft".to_string(), value: None },
                TargetNode::Member { name: "XRight".to_string(), value: Some("1 << 1".to_string()) },
            ],
        };
        assert_eq!(
            printer.print(&[node], 0),
            "public enum TextAlign {\n    XLeft,\n    XRight = 1 << 1,\n}\n"
        );
    }
}
