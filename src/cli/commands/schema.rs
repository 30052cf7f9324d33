//! Schema command implementation.
//!
//! The `catalog-lint schema` command prints the JSON Schema of
//! `.catalog-lint.yml`, for editor integration.

use crate::config::config_json_schema;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = serde_json::to_string_pretty(&config_json_schema()).map_err(anyhow::Error::from)?;
        ui.message(&schema);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_config_schema() {
        let mut ui = MockUI::new();

        let result = SchemaCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let schema: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(schema["properties"]["boms"].is_object());
        assert!(schema["properties"]["catalog"].is_object());
    }
}
