//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cfe",
    version,
    about = "Conditional field editor - inspect schemas and visibility rules",
    long_about = "Inspect an entry editor's content schema and its conditional \
                  field visibility rules.\n\n\
                  Resolves which fields are visible for a given controlling-field \
                  state and lints rule configurations before they ship."
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
    /// List every schema field with its classification.
    Fields(ConfigArgs),

    /// Resolve the visible field set for a controlling-field state.
    Resolve(ResolveArgs),

    /// Check a rule configuration against its schema.
    Lint(LintArgs),
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Path to the content schema JSON document.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    /// Path to the conditional rules JSON document.
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: PathBuf,
}

#[derive(Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override a controlling field value, e.g. --set postVariant=review.
    ///
    /// `true`/`false` parse as booleans and an empty right-hand side
    /// clears the value; anything else is taken as text. May be
    /// repeated. Values start from the schema defaults.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Emit the visible field list as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LintArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Emit the lint report as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
