//! Command-line interface for the enum binding generator

use anyhow::{Context, Result};
use apigen_core::{generate_from_files, ApiGenError, GeneratorConfig};
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(about = "Generate C# enum bindings from a parsed C header")]
#[command(version)]
#[command(long_about = "Reads the JSON declaration tree produced by the header parser, applies the name override table, and writes the generated C# enums into the output directory")]
struct Cli {
    /// Parsed header namespace (JSON)
    #[arg(long)]
    ast: PathBuf,

    /// Name override file (one `source target` pair per line)
    #[arg(long)]
    overrides: PathBuf,

    /// Output directory for the generated file
    #[arg(short = 'd', long)]
    output: PathBuf,

    /// Generator configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the namespace wrapping the generated enums
    #[arg(long)]
    namespace: Option<String>,

    /// Do not print the generated text to stdout
    #[arg(long)]
    no_echo: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable quiet mode (suppress non-error output)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Set log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Inputs that could not be loaded exit with 2, anything later with 1
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ApiGenError>() {
        Some(e) if e.is_fatal_load() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .map_err(ApiGenError::from)
            .with_context(|| format!("Failed to load generator config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(namespace) = &cli.namespace {
        config.namespace = namespace.clone();
    }
    if cli.no_echo {
        config.echo_to_stdout = false;
    }

    let generated = generate_from_files(&cli.ast, &cli.overrides, &cli.output, &config)?;

    info!(
        "Generated {} enums ({} skipped) into {}",
        generated.enum_names.len(),
        generated.skipped.len(),
        generated.path.display()
    );
    Ok(())
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else if cli.verbose {
        log::LevelFilter::Debug
    } else {
        match &cli.log_level {
            Some(LogLevel::Error) => log::LevelFilter::Error,
            Some(LogLevel::Warn) => log::LevelFilter::Warn,
            Some(LogLevel::Info) => log::LevelFilter::Info,
            Some(LogLevel::Debug) => log::LevelFilter::Debug,
            Some(LogLevel::Trace) => log::LevelFilter::Trace,
            None => log::LevelFilter::Info,
        }
    };

    // Logs go to stderr so the echoed file on stdout stays clean.
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
