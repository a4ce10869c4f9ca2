//! Whole-file generation
//!
//! Walks every enum of a namespace in input order, frames the result with
//! the banner, usings and namespace block, and writes it to the output
//! directory in one atomic step.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ast::Namespace;
use crate::config::GeneratorConfig;
use crate::emitter::EnumEmitter;
use crate::error::{ApiGenError, ApiGenResult};
use crate::overrides::OverrideTable;

/// Result of a generator run
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub enum_names: Vec<String>,
    pub skipped: Vec<String>,
    pub text: String,
}

/// Binding generator for one namespace. The override table is borrowed and
/// never mutated, so separate generators can share it.
pub struct Generator<'a> {
    overrides: &'a OverrideTable,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(overrides: &'a OverrideTable, config: &'a GeneratorConfig) -> Self {
        Self { overrides, config }
    }

    /// Render, write, and optionally echo the generated file
    pub fn generate(&self, namespace: &Namespace, output_dir: &Path) -> ApiGenResult<GeneratedFile> {
        self.config.validate()?;
        log::info!("Generating bindings for {} enums", namespace.enums.len());

        let (text, enum_names, skipped) = self.render_with_report(namespace);
        let path = output_dir.join(&self.config.output_file);

        write_atomically(output_dir, &path, &text)?;
        log::info!("Wrote {} enums to {}", enum_names.len(), path.display());

        if self.config.echo_to_stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }

        Ok(GeneratedFile {
            path,
            enum_names,
            skipped,
            text,
        })
    }

    /// The full generated file as text
    pub fn render(&self, namespace: &Namespace) -> String {
        self.render_with_report(namespace).0
    }

    fn render_with_report(&self, namespace: &Namespace) -> (String, Vec<String>, Vec<String>) {
        let emitter = EnumEmitter::new(self.overrides);
        let mut bodies = Vec::new();
        let mut emitted = Vec::new();
        let mut skipped = Vec::new();

        for decl in &namespace.enums {
            if self.overrides.should_skip_impl(&decl.name) {
                log::info!("Skipping '{}' (marked @noimpl)", decl.name);
                skipped.push(decl.name.clone());
                continue;
            }

            log::debug!("Emitting enum '{}' with {} items", decl.name, decl.items.len());
            bodies.push(emitter.emit(decl, 1));
            emitted.push(decl.name.clone());
        }

        let mut text = self.file_header();
        text.push_str(&bodies.join("\n"));
        text.push_str("}\n");

        (text, emitted, skipped)
    }

    fn file_header(&self) -> String {
        let mut header = String::new();

        for line in &self.config.banner {
            if line.is_empty() {
                header.push_str("//\n");
            } else {
                header.push_str(&format!("// {}\n", line));
            }
        }
        if !self.config.banner.is_empty() {
            header.push('\n');
        }

        for using in &self.config.usings {
            header.push_str(&format!("using {};\n", using));
        }
        if !self.config.usings.is_empty() {
            header.push('\n');
        }

        header.push_str(&format!("namespace {}\n{{\n", self.config.namespace));
        header
    }
}

/// Load every input, then generate. The override table is read first so a
/// missing or unreadable table aborts before anything touches `output_dir`.
pub fn generate_from_files(
    ast_path: &Path,
    overrides_path: &Path,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> ApiGenResult<GeneratedFile> {
    config.validate()?;
    let overrides = OverrideTable::load(overrides_path)?;
    let namespace = Namespace::from_file(ast_path)?;

    Generator::new(&overrides, config).generate(&namespace, output_dir)
}

fn write_atomically(output_dir: &Path, path: &Path, text: &str) -> ApiGenResult<()> {
    std::fs::create_dir_all(output_dir).map_err(|e| ApiGenError::output(output_dir, e))?;

    let mut staged = tempfile::NamedTempFile::new_in(output_dir)
        .map_err(|e| ApiGenError::output(output_dir, e))?;
    staged
        .write_all(text.as_bytes())
        .map_err(|e| ApiGenError::output(path, e))?;
    staged
        .persist(path)
        .map_err(|e| ApiGenError::output(path, e.error))?;

    Ok(())
}
