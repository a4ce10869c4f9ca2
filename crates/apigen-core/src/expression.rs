//! Rebuilds enumerator value expressions in target syntax
//!
//! Operands and operators come out in exactly the source order. Bit patterns
//! like `a | b | (1 << 3)` must not be reassociated.

use crate::ast::Expression;
use crate::naming::NameTransformer;

#[derive(Debug, Clone, Copy)]
pub struct ExpressionReconstructor<'a> {
    names: NameTransformer<'a>,
}

impl<'a> ExpressionReconstructor<'a> {
    pub fn new(names: NameTransformer<'a>) -> Self {
        Self { names }
    }

    /// Render `expr`, renaming references to sibling constants.
    ///
    /// `owner` is the enclosing enum's source name; references that repeat it
    /// have it stripped like member names do.
    pub fn rebuild(&self, expr: &Expression, owner: &str) -> String {
        // Walk down the left spine, collecting `op right` pairs back to front.
        let mut pieces = Vec::new();
        let mut current = expr;

        while let Expression::BinaryOp { op, left, right } = current {
            pieces.push(self.render_term(right, owner));
            pieces.push(op.clone());
            current = left.as_ref();
        }
        pieces.push(self.render_term(current, owner));

        pieces.reverse();
        pieces.join(" ")
    }

    fn render_term(&self, term: &Expression, owner: &str) -> String {
        match term {
            Expression::Reference(name) => self.names.member_name(name, owner),
            Expression::Unary { op, operand } => format!("{}{}", op, self.render_term(operand, owner)),
            Expression::Paren(inner) => format!("({})", self.rebuild(inner, owner)),
            // A binary node on the right can only come from grouping in the source.
            Expression::BinaryOp { .. } => format!("({})", self.rebuild(term, owner)),
            Expression::Opaque(text) => {
                if looks_like_identifier(text) {
                    log::warn!(
                        "Expression term '{}' in '{}' is not a resolved reference, emitting it unrenamed",
                        text,
                        owner
                    );
                }
                text.clone()
            }
        }
    }
}

fn looks_like_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideTable;

    fn rebuild(table: &OverrideTable, expr: &Expression, owner: &str) -> String {
        ExpressionReconstructor::new(NameTransformer::new(table)).rebuild(expr, owner)
    }

    fn r(name: &str) -> Expression {
        Expression::reference(name)
    }

    fn o(text: &str) -> Expression {
        Expression::opaque(text)
    }

    #[test]
    fn test_single_terms() {
        let table = OverrideTable::new();
        assert_eq!(rebuild(&table, &o("42"), "mode"), "42");
        assert_eq!(rebuild(&table, &r("mode_fast"), "mode"), "Fast");
    }

    #[test]
    fn test_shift_is_kept_verbatim() {
        let table = OverrideTable::new();
        let expr = Expression::binary("<<", o("1"), o("1"));
        assert_eq!(rebuild(&table, &expr, "text_align"), "1 << 1");
    }

    #[test]
    fn test_or_chain_keeps_source_order() {
        let table = OverrideTable::new();
        // text_align_x_left | text_align_y_top | (1 << 3)
        let expr = Expression::binary(
            "|",
            Expression::binary("|", r("text_align_x_left"), r("text_align_y_top")),
            Expression::paren(Expression::binary("<<", o("1"), o("3"))),
        );
        assert_eq!(rebuild(&table, &expr, "text_align"), "XLeft | YTop | (1 << 3)");
    }

    #[test]
    fn test_nested_right_operand_is_grouped() {
        let table = OverrideTable::new();
        let expr = Expression::binary("|", r("a"), Expression::binary("<<", o("1"), o("3")));
        assert_eq!(rebuild(&table, &expr, "flags"), "A | (1 << 3)");
    }

    #[test]
    fn test_references_use_overrides_and_foreign_prefixes_survive() {
        let table = OverrideTable::from_pairs([("ui_move_exact", "Exact")]);
        let expr = Expression::binary("|", r("ui_move_exact"), r("other_enum_value"));
        assert_eq!(rebuild(&table, &expr, "ui_move"), "Exact | OtherEnumValue");
    }

    #[test]
    fn test_unary_operand_is_renamed() {
        let table = OverrideTable::new();
        let expr = Expression::binary(
            "&",
            r("layer_all"),
            Expression::unary("~", r("layer_vfx")),
        );
        assert_eq!(rebuild(&table, &expr, "layer"), "All & ~Vfx");
        assert_eq!(rebuild(&table, &Expression::unary("-", o("1")), "layer"), "-1");
    }

    #[test]
    fn test_unknown_terms_fall_back_to_raw_text() {
        let table = OverrideTable::new();
        let expr = Expression::binary("+", o("SOME_MACRO"), o("0x10"));
        assert_eq!(rebuild(&table, &expr, "layer"), "SOME_MACRO + 0x10");
        assert!(looks_like_identifier("SOME_MACRO"));
        assert!(!looks_like_identifier("0x10"));
        assert!(!looks_like_identifier("(1 << 2)"));
    }
}
