//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ceos",
    version,
    about = "Inspect and decode CEOS SAR leader files",
    long_about = "Inspect and decode CEOS SAR leader files.\n\n\
                  Splits a file into physical records and decodes the record\n\
                  types it knows (dataset summary) field by field."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the physical records of a CEOS file.
    Records(RecordsArgs),

    /// Decode the records of a CEOS file.
    Decode(DecodeArgs),

    /// Print the layout of a built-in record schema.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct RecordsArgs {
    /// Path to the CEOS file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Path to the CEOS file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Decode only the record at this 0-based index.
    #[arg(long = "record", value_name = "N")]
    pub record: Option<usize>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Schema to print.
    #[arg(long = "name", value_enum, default_value = "dataset-summary")]
    pub name: SchemaArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Header,
    DatasetSummary,
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
