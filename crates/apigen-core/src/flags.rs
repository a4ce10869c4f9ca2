//! Bitmask classification

use crate::ast::EnumDecl;

const SHIFT_OPERATORS: [&str; 2] = ["<<", ">>"];

/// An enum is a flags enum when any item value contains a shift.
///
/// Purely textual: enums made of plain literals or `|` combinations are not
/// flags, which matches how the native headers spell bit positions.
pub fn is_flags(decl: &EnumDecl) -> bool {
    decl.items.iter().any(|item| {
        item.value
            .as_ref()
            .map(|value| {
                let text = value.to_source_text();
                SHIFT_OPERATORS.iter().any(|op| text.contains(op))
            })
            .unwrap_or(false)
    })
}
