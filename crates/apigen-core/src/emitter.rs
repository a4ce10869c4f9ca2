//! Per-declaration emission

use crate::ast::{EnumDecl, EnumItem};
use crate::comment::CommentFormatter;
use crate::expression::ExpressionReconstructor;
use crate::flags::is_flags;
use crate::naming::NameTransformer;
use crate::overrides::OverrideTable;
use crate::target::{CSharpPrinter, TargetNode};

/// Turns one enum declaration into C# text. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct EnumEmitter<'a> {
    names: NameTransformer<'a>,
    expressions: ExpressionReconstructor<'a>,
    comments: CommentFormatter,
    printer: CSharpPrinter,
}

impl<'a> EnumEmitter<'a> {
    pub fn new(overrides: &'a OverrideTable) -> Self {
        Self::with_printer(overrides, CSharpPrinter::new())
    }

    pub fn with_printer(overrides: &'a OverrideTable, printer: CSharpPrinter) -> Self {
        let names = NameTransformer::new(overrides);
        Self {
            names,
            expressions: ExpressionReconstructor::new(names),
            comments: CommentFormatter::with_printer(printer.clone()),
            printer,
        }
    }

    /// Render `decl` with its declaration line at `indent_depth`
    pub fn emit(&self, decl: &EnumDecl, indent_depth: usize) -> String {
        self.printer.print(&self.build(decl), indent_depth)
    }

    /// Doc comment, optional `[Flags]`, then the declaration itself
    pub fn build(&self, decl: &EnumDecl) -> Vec<TargetNode> {
        let mut nodes = Vec::new();

        if let Some(comment) = &decl.comment {
            nodes.extend(self.comments.to_node(comment));
        }

        if is_flags(decl) {
            nodes.push(TargetNode::attribute("Flags"));
        }

        let mut members = Vec::with_capacity(decl.items.len());
        for item in &decl.items {
            self.build_member(decl, item, &mut members);
        }

        nodes.push(TargetNode::EnumDecl {
            name: self.names.type_name(&decl.name),
            members,
        });
        nodes
    }

    fn build_member(&self, decl: &EnumDecl, item: &EnumItem, members: &mut Vec<TargetNode>) {
        if let Some(comment) = &item.comment {
            members.extend(self.comments.to_node(comment));
        }

        members.push(TargetNode::Member {
            name: self.names.member_name(&item.name, &decl.name),
            value: item
                .value
                .as_ref()
                .map(|value| self.expressions.rebuild(value, &decl.name)),
        });
    }
}
