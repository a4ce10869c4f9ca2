//! Header declaration tree consumed by the generator
//!
//! This is the output of the external C header parser, deserialized from
//! JSON. The generator only reads it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{ApiGenError, ApiGenResult};

/// A parsed header namespace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Namespace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
}

impl Namespace {
    /// Decode a namespace from its JSON form
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Read and decode a namespace from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ApiGenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiGenError::ast_load(path, e.to_string()))?;
        Self::from_json_str(&content).map_err(|e| ApiGenError::ast_load(path, e.to_string()))
    }
}

/// An enum declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default)]
    pub items: Vec<EnumItem>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl EnumDecl {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            comment: None,
        }
    }

    pub fn with_item(mut self, item: EnumItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// A single enumerator. A missing value means the target auto-increments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(default)]
    pub value: Option<Expression>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl EnumItem {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            value: None,
            comment: None,
        }
    }

    pub fn with_value(mut self, value: Expression) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// Enumerator value expression.
///
/// Binary chains lean left the way the parser builds them: `a | b | c` is
/// `BinaryOp(|, BinaryOp(|, a, b), c)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Reference to another declared identifier
    Reference(String),
    BinaryOp {
        op: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Prefix operator such as `~` or `-`
    Unary {
        op: String,
        operand: Box<Expression>,
    },
    /// Explicit parentheses from the source
    Paren(Box<Expression>),
    /// Anything else, kept as its source spelling
    Opaque(String),
}

impl Expression {
    pub fn reference<S: Into<String>>(name: S) -> Self {
        Self::Reference(name.into())
    }

    pub fn opaque<S: Into<String>>(text: S) -> Self {
        Self::Opaque(text.into())
    }

    pub fn binary<S: Into<String>>(op: S, left: Expression, right: Expression) -> Self {
        Self::BinaryOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary<S: Into<String>>(op: S, operand: Expression) -> Self {
        Self::Unary {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn paren(inner: Expression) -> Self {
        Self::Paren(Box::new(inner))
    }

    /// The expression as it was spelled in the header
    pub fn to_source_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Reference(name) => write!(f, "{}", name),
            Expression::BinaryOp { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Expression::Unary { op, operand } => write!(f, "{}{}", op, operand),
            Expression::Paren(inner) => write!(f, "({})", inner),
            Expression::Opaque(text) => write!(f, "{}", text),
        }
    }
}

/// Doc comment: a root holding one paragraph of ordered children
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub children: Vec<CommentNode>,
}

impl Comment {
    pub fn new(children: Vec<CommentNode>) -> Self {
        Self { children }
    }

    /// Convenience for a comment made only of text runs
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            children: lines.iter().map(|l| CommentNode::Text(l.to_string())).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommentNode {
    Text(String),
    InlineCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_keeps_spelling() {
        let expr = Expression::binary(
            "|",
            Expression::reference("text_align_x_left"),
            Expression::paren(Expression::binary("<<", Expression::opaque("1"), Expression::opaque("3"))),
        );
        assert_eq!(expr.to_source_text(), "text_align_x_left | (1 << 3)");
        assert_eq!(Expression::unary("~", Expression::reference("mask")).to_source_text(), "~mask");
    }

    #[test]
    fn test_namespace_from_json() {
        let json = r#"{
            "name": "sk",
            "enums": [{
                "name": "text_align",
                "comment": { "children": [ { "Text": "Alignment." }, { "InlineCommand": "see" } ] },
                "items": [
                    { "name": "text_align_x_left" },
                    { "name": "text_align_x_right",
                      "value": { "BinaryOp": { "op": "<<", "left": { "Opaque": "1" }, "right": { "Opaque": "1" } } } }
                ]
            }]
        }"#;
        let ns = Namespace::from_json_str(json).unwrap();
        assert_eq!(ns.enums.len(), 1);
        let e = &ns.enums[0];
        assert_eq!(e.items[0].value, None);
        assert_eq!(
            e.items[1].value,
            Some(Expression::binary("<<", Expression::opaque("1"), Expression::opaque("1")))
        );
        assert_eq!(
            e.comment.as_ref().unwrap().children[1],
            CommentNode::InlineCommand("see".to_string())
        );
    }

    #[test]
    fn test_namespace_from_missing_file() {
        let err = Namespace::from_file("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ApiGenError::AstLoad { .. }));
    }
}
