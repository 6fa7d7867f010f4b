//! CLI argument definitions for the IIA planner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "iia",
    version,
    about = "IIA module planner - choose modules and check area eligibility",
    long_about = "Plan a Part IIA module selection.\n\n\
                  Modules are gated by prerequisites, mutual-exclusion sets, \
                  per-term quotas and management-module rules. Each selection \
                  is checked against every specialization area."
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

    /// Catalog directory holding ModuleList.csv, Areas.csv and rules.toml
    /// (default: $IIA_CATALOG_DIR, then the built-in catalog).
    #[arg(long = "catalog-dir", value_name = "DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the catalog modules.
    Modules,

    /// List the specialization areas and their rules.
    Areas,

    /// Show the description and listed modules of one area.
    Describe(DescribeArgs),

    /// Toggle modules in order and print the resulting state.
    Check(CheckArgs),

    /// Interactive session reading commands from stdin.
    Shell,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Area name (case-insensitive).
    #[arg(value_name = "AREA")]
    pub area: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Module codes to toggle, in order.
    #[arg(value_name = "CODES")]
    pub codes: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
