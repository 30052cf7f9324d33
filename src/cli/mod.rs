//! Command-line interface for catalog-lint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, FormatArgs};
pub use commands::{
    Command, CommandContext, CommandDispatcher, CommandResult, EXIT_INVALID_INPUT, EXIT_PROBLEMS,
};
