//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`catalog-lint check`, `catalog-lint format`)
//! - Shared config and catalog resolution through [`CommandContext`]
//! - Consistent exit codes

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod format;
pub mod schema;

pub use dispatcher::{
    Command, CommandContext, CommandDispatcher, CommandResult, EXIT_INVALID_INPUT, EXIT_PROBLEMS,
};
