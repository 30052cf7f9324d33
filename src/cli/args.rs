//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::lint::OutputFormat;

/// catalog-lint - Validate and format Gradle version catalogs.
#[derive(Debug, Parser)]
#[command(name = "catalog-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .catalog-lint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to the version catalog (overrides the configured location)
    #[arg(long, global = true, env = "CATALOG_LINT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the version catalog (default if no command specified)
    Check(CheckArgs),

    /// Rewrite the version catalog in canonical form
    Format(FormatArgs),

    /// Print the JSON Schema of the configuration file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `format` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FormatArgs {
    /// Only check whether the catalog is formatted; write nothing
    #[arg(long)]
    pub check: bool,

    /// Print the formatted catalog instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
