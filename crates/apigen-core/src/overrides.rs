//! Name override table
//!
//! A human-authored list of identifiers whose target spelling bypasses the
//! automatic case conversion. One mapping per line:
//!
//! ```text
//! # comment
//! sk_settings_t   SKSettings
//! @noimpl        some_handwritten_enum other_enum
//! ```
//!
//! Lines with anything other than two tokens are skipped with a warning.
//! `@noimpl` lists source names that must not be generated at all.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{ApiGenError, ApiGenResult};

const NO_IMPL_DIRECTIVE: &str = "@noimpl";

/// Immutable source-name → target-name mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    overrides: HashMap<String, String>,
    no_impl: HashSet<String>,
}

impl OverrideTable {
    /// Empty table, every name goes through case conversion
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from a file. A file that cannot be read is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> ApiGenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiGenError::override_table_load(path, e))?;

        let table = Self::from_str(&content);
        log::info!(
            "Loaded {} overrides from {}",
            table.len(),
            path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        );
        Ok(table)
    }

    /// Parse the override format from memory
    pub fn from_str(content: &str) -> Self {
        let mut table = Self::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();

            if words[0] == NO_IMPL_DIRECTIVE {
                table.no_impl.extend(words[1..].iter().map(|w| w.to_string()));
                continue;
            }

            if words.len() != 2 {
                log::warn!("{}", format_warning(index + 1, line));
                continue;
            }

            if let Some(previous) = table.overrides.insert(words[0].to_string(), words[1].to_string()) {
                log::warn!(
                    "Override for '{}' redefined on line {} ('{}' replaced by '{}')",
                    words[0],
                    index + 1,
                    previous,
                    words[1]
                );
            }
        }

        table
    }

    /// Build a table directly from pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            no_impl: HashSet::new(),
        }
    }

    /// The override for `name`, if one exists
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    /// Whether generation of `name` is suppressed with `@noimpl`
    pub fn should_skip_impl(&self, name: &str) -> bool {
        self.no_impl.contains(name)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Warning for a line that is not exactly `source target`
fn format_warning(line_number: usize, line: &str) -> String {
    format!("Override line has wrong format (need 2 words):\n#{}: {}", line_number, line)
}
