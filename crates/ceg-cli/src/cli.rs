//! CLI argument definitions for the entity code generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xrm-ceg",
    version,
    about = "Entity code generator - TypeScript constants and enums from entity metadata",
    long_about = "Generate TypeScript sources from exported entity metadata.\n\n\
                  Each entity yields a constants module (field names) and an enums\n\
                  module (option sets, state/status codes and boolean flags)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate constants and enums modules for every entity.
    Generate(GenerateArgs),

    /// List the entities of a metadata document and their artifact names.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON config file with `input` and `outputFolder` keys.
    ///
    /// Relative paths in the file are resolved against the file's folder.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Metadata document (overrides `input` from the config file).
    #[arg(long = "input", short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output root (overrides `outputFolder` from the config file).
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Generate and render without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Refuse to run if any target file already exists.
    #[arg(long = "no-overwrite")]
    pub no_overwrite: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Metadata document to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
