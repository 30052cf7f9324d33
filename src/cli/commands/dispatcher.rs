//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for resolving the config and catalog locations
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, LinterConfig};
use crate::error::{CatalogError, Result};
use crate::ui::UserInterface;

/// Exit code for rule violations and unformatted catalogs.
pub const EXIT_PROBLEMS: i32 = 1;

/// Exit code for a missing or unreadable catalog or configuration.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Report errors caused by bad input and turn them into a failed result.
///
/// Anything else is passed through unchanged.
pub(crate) fn report_input_error(
    ui: &mut dyn UserInterface,
    err: CatalogError,
) -> Result<CommandResult> {
    match err {
        CatalogError::CatalogNotFound { .. }
        | CatalogError::MalformedEntry { .. }
        | CatalogError::UnexpectedValue { .. }
        | CatalogError::ConfigNotFound { .. }
        | CatalogError::ConfigParseError { .. }
        | CatalogError::ConfigValidationError { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(EXIT_INVALID_INPUT))
        }
        other => Err(other),
    }
}

/// Where a command finds its configuration and catalog.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context rooted at `project_root` with no overrides.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path: None,
            catalog_path: None,
        }
    }

    /// Use an explicit config file instead of discovering one.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Use an explicit catalog path instead of the configured one.
    pub fn with_catalog(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the configuration for this project.
    pub fn load_config(&self) -> Result<LinterConfig> {
        load_config(&self.project_root, self.config_path.as_deref())
    }

    /// Resolve the catalog location.
    ///
    /// The CLI override wins over the configured path, which wins over the
    /// default. Relative paths are resolved against the project root.
    pub fn catalog_path(&self, config: &LinterConfig) -> PathBuf {
        let relative = self
            .catalog_path
            .clone()
            .unwrap_or_else(|| config.catalog_path());
        let path = self.project_root.join(relative);
        debug!(catalog = %path.display(), "resolved catalog path");
        path
    }

    /// Path for messages, relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            context: CommandContext::new(project_root),
        }
    }

    /// Create a dispatcher that honours the global path overrides in `cli`.
    pub fn from_cli(project_root: PathBuf, cli: &Cli) -> Self {
        Self {
            context: CommandContext::new(project_root)
                .with_config(cli.config.clone())
                .with_catalog(cli.catalog.clone()),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.context.project_root()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Format(args)) => {
                let cmd = super::format::FormatCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to check command with default args
                let cmd = super::check::CheckCommand::new(self.context.clone(), CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
