//! Generator configuration
//!
//! Controls the framing of the generated file: namespace, banner, using
//! directives and the output file name. Loaded from TOML, every field optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace wrapping every generated enum
    pub namespace: String,

    /// Name of the generated file inside the output directory
    pub output_file: String,

    /// Comment lines written at the very top of the file, without the `//` marker
    pub banner: Vec<String>,

    /// Namespaces imported with `using` directives
    pub usings: Vec<String>,

    /// Also print the generated text to standard output
    pub echo_to_stdout: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "StereoKit".to_string(),
            output_file: "NativeEnums.cs".to_string(),
            banner: vec![
                "This is a generated file based on stereokit.h! Please don't modify it".to_string(),
                "directly :) Instead, modify the header file, and run the StereoKitAPIGen".to_string(),
                "project.".to_string(),
            ],
            usings: vec!["System".to_string()],
            echo_to_stdout: true,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file {:?}: {}", path.as_ref(), e)))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::InvalidValue("namespace cannot be empty".to_string()));
        }

        if !self.namespace.split('.').all(is_valid_csharp_identifier) {
            return Err(ConfigError::InvalidValue(format!(
                "namespace '{}' is not a valid C# namespace",
                self.namespace
            )));
        }

        if self.banner.iter().all(|line| line.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(
                "banner cannot be empty, generated files must be marked as generated".to_string(),
            ));
        }

        if self.output_file.is_empty() {
            return Err(ConfigError::InvalidValue("output_file cannot be empty".to_string()));
        }

        if self.output_file.contains('/') || self.output_file.contains('\\') || self.output_file == ".." {
            return Err(ConfigError::InvalidValue(format!(
                "output_file '{}' must be a bare file name",
                self.output_file
            )));
        }

        for using in &self.usings {
            if !using.split('.').all(is_valid_csharp_identifier) {
                return Err(ConfigError::InvalidValue(format!("invalid using directive '{}'", using)));
            }
        }

        Ok(())
    }
}

/// Check whether `name` is a plain C# identifier
pub fn is_valid_csharp_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
