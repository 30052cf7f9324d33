//! Format command implementation.
//!
//! The `catalog-lint format` command rewrites the version catalog in
//! canonical form, or with `--check` only reports whether it would.

use std::fs;

use tracing::info;

use crate::catalog::{read_catalog_text, segment};
use crate::cli::args::FormatArgs;
use crate::error::Result;
use crate::format::format_catalog;
use crate::ui::UserInterface;

use super::dispatcher::{report_input_error, Command, CommandContext, CommandResult, EXIT_PROBLEMS};

/// The format command implementation.
pub struct FormatCommand {
    context: CommandContext,
    args: FormatArgs,
}

impl FormatCommand {
    /// Create a new format command.
    pub fn new(context: CommandContext, args: FormatArgs) -> Self {
        Self { context, args }
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let path = self.context.catalog_path(&config);
        let shown = self.context.display_path(&path);

        let original = read_catalog_text(&path)?;
        let formatted = format_catalog(&segment(&original))?;

        if self.args.stdout {
            // message() ends the line itself
            ui.message(formatted.strip_suffix('\n').unwrap_or(&formatted));
            return Ok(CommandResult::success());
        }

        if formatted == original {
            ui.success(&format!("{shown} is already formatted"));
            return Ok(CommandResult::success());
        }

        if self.args.check {
            ui.error(&format!("{shown} is not formatted"));
            return Ok(CommandResult::failure(EXIT_PROBLEMS));
        }

        fs::write(&path, &formatted)?;
        info!(catalog = %shown, "rewrote catalog");
        ui.success(&format!("Formatted {shown}"));
        Ok(CommandResult::success())
    }
}

impl Command for FormatCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui).or_else(|e| report_input_error(ui, e))
    }
}
