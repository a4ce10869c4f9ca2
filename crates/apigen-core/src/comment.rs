//! Doc comment conversion
//!
//! Text runs become lines of a `<summary>` block. Inline commands (`@see`,
//! `@ref`, ...) stay attached to the prose around them. A comment whose first
//! line starts with `obsolete:` becomes an `[Obsolete]` attribute instead.

use crate::ast::{Comment, CommentNode};
use crate::target::{CSharpPrinter, TargetNode};

const OBSOLETE_MARKER: &str = "obsolete:";

#[derive(Debug, Clone, Default)]
pub struct CommentFormatter {
    printer: CSharpPrinter,
}

impl CommentFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_printer(printer: CSharpPrinter) -> Self {
        Self { printer }
    }

    /// Render `comment` at `indent_depth`. Empty comments render to nothing.
    pub fn format(&self, comment: &Comment, indent_depth: usize) -> String {
        match self.to_node(comment) {
            Some(node) => self.printer.render(&node, indent_depth),
            None => String::new(),
        }
    }

    /// The node a comment turns into: a summary or a deprecation attribute
    pub fn to_node(&self, comment: &Comment) -> Option<TargetNode> {
        if comment.children.is_empty() {
            return None;
        }

        let text = join_children(&comment.children);
        let lines: Vec<&str> = text.split('\n').map(|line| line.trim_end_matches('\r')).collect();

        // The attribute argument is a string literal, not markup.
        if let Some(message) = lines[0].strip_prefix(OBSOLETE_MARKER) {
            return Some(TargetNode::attribute_with_argument("Obsolete", message.trim()));
        }

        Some(TargetNode::DocComment(lines.into_iter().map(escape_markup).collect()))
    }
}

/// Concatenate the children, breaking lines only between two prose runs
fn join_children(children: &[CommentNode]) -> String {
    let mut text = String::new();

    for (index, child) in children.iter().enumerate() {
        match child {
            CommentNode::Text(run) => text.push_str(run),
            CommentNode::InlineCommand(name) => {
                text.push('@');
                text.push_str(name);
            }
        }

        if let Some(next) = children.get(index + 1) {
            if is_prose(child) && is_prose(next) {
                text.push('\n');
            }
        }
    }

    text
}

/// Plain text run. The header parser splits lone markup characters into
/// their own runs; those hug their neighbours like commands do.
fn is_prose(node: &CommentNode) -> bool {
    match node {
        CommentNode::Text(run) => !matches!(run.as_str(), "@" | "&" | "<" | ">"),
        CommentNode::InlineCommand(_) => false,
    }
}

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
