//! snake_case → PascalCase/camelCase conversion with override lookup

use crate::overrides::OverrideTable;

/// Converts source identifiers into target spelling.
///
/// Overrides always win; everything else goes through [`snake_to_camel`].
#[derive(Debug, Clone, Copy)]
pub struct NameTransformer<'a> {
    overrides: &'a OverrideTable,
}

impl<'a> NameTransformer<'a> {
    pub fn new(overrides: &'a OverrideTable) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &'a OverrideTable {
        self.overrides
    }

    /// Convert `raw_name`.
    ///
    /// An override for `raw_name` is returned as-is, ignoring both
    /// `capitalize_first` and `strip_prefix_len`. Otherwise the first
    /// `strip_prefix_len` characters are dropped (clamped to the name length)
    /// before conversion.
    pub fn transform(&self, raw_name: &str, capitalize_first: bool, strip_prefix_len: usize) -> String {
        if let Some(name) = self.overrides.lookup(raw_name) {
            return name.to_string();
        }

        let remainder = match raw_name.char_indices().nth(strip_prefix_len) {
            Some((offset, _)) => &raw_name[offset..],
            None => "",
        };
        snake_to_camel(remainder, capitalize_first)
    }

    /// Type names: capitalized, nothing stripped
    pub fn type_name(&self, raw_name: &str) -> String {
        self.transform(raw_name, true, 0)
    }

    /// Names nested under a declaration: capitalized, with the owner's name
    /// removed when the member actually repeats it
    pub fn member_name(&self, raw_name: &str, owner: &str) -> String {
        self.transform(raw_name, true, shared_prefix_len(raw_name, owner))
    }
}

/// Number of characters to strip from `name` when it starts with `prefix`
pub fn shared_prefix_len(name: &str, prefix: &str) -> usize {
    if name.starts_with(prefix) {
        prefix.chars().count()
    } else {
        0
    }
}

/// Join `_`-separated words, capitalizing every word after the first and the
/// first one too when `capitalize_first` is set. Empty words vanish.
pub fn snake_to_camel(snake_case: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(snake_case.len());

    for (index, word) in snake_case.split('_').enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };

        if index > 0 || capitalize_first {
            result.extend(first.to_uppercase());
        } else {
            result.push(first);
        }
        result.push_str(chars.as_str());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> OverrideTable {
        OverrideTable::new()
    }

    #[test]
    fn test_case_conversion() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.transform("text_align", true, 0), "TextAlign");
        assert_eq!(names.transform("text_align", false, 0), "textAlign");
        assert_eq!(names.transform("button_state_just_active", true, "button_state".len()), "JustActive");
        assert_eq!(names.transform("already", false, 0), "already");
    }

    #[test]
    fn test_override_bypasses_every_rule() {
        let table = OverrideTable::from_pairs([("ui_move", "UIMove")]);
        let names = NameTransformer::new(&table);
        for capitalize in [true, false] {
            for strip in [0, 3, 100] {
                assert_eq!(names.transform("ui_move", capitalize, strip), "UIMove");
            }
        }
    }

    #[test]
    fn test_over_length_prefix_is_clamped() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.transform("short", true, 50), "");
        assert_eq!(names.transform("short", true, 5), "");
        assert_eq!(names.transform("", false, 1), "");
    }

    #[test]
    fn test_consecutive_separators() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.transform("a__b___c_", true, 0), "ABC");
        assert_eq!(names.transform("_leading", false, 0), "Leading");
        assert_eq!(names.transform("__", true, 0), "");
    }

    #[test]
    fn test_output_never_contains_underscores() {
        let table = empty();
        let names = NameTransformer::new(&table);
        for raw in ["x_left", "_a_b_", "render_layer_0", "snake_case_id", "___"] {
            for capitalize in [true, false] {
                let out = names.transform(raw, capitalize, 0);
                assert!(!out.contains('_'), "{raw} -> {out}");
            }
        }
    }

    #[test]
    fn test_first_word_capitalization_follows_flag() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.transform("player_count", false, 0), "playerCount");
        assert_eq!(names.transform("player_count", true, 0), "PlayerCount");
    }

    #[test]
    fn test_member_name_only_strips_repeated_owner() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.member_name("text_align_x_left", "text_align"), "XLeft");
        assert_eq!(names.member_name("other_value", "text_align"), "OtherValue");
        assert_eq!(shared_prefix_len("text_align_center", "text_align"), 10);
        assert_eq!(shared_prefix_len("center", "text_align"), 0);
    }

    #[test]
    fn test_multibyte_prefix_stripping() {
        let table = empty();
        let names = NameTransformer::new(&table);
        assert_eq!(names.transform("ñu_value", true, 2), "Value");
    }
}
