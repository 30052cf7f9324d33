//! Check command implementation.
//!
//! The `catalog-lint check` command validates the version catalog and
//! reports every rule violation.

use tracing::debug;

use crate::catalog::read_catalog_file;
use crate::cli::args::CheckArgs;
use crate::error::{CatalogError, Result};
use crate::lint::{CatalogLinter, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat};
use crate::ui::UserInterface;

use super::dispatcher::{report_input_error, Command, CommandContext, CommandResult, EXIT_PROBLEMS};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let path = self.context.catalog_path(&config);
        let shown = self.context.display_path(&path);
        let catalog = read_catalog_file(&path)?;
        if catalog.is_empty() {
            ui.warning(&format!("{shown} declares no catalog entries"));
        }

        let linter = CatalogLinter::new(config.boms);
        let diagnostics = match linter.lint(&catalog) {
            Ok(diagnostics) => diagnostics,
            Err(CatalogError::BomDeclarations { problems }) => {
                for problem in &problems {
                    ui.error(problem);
                }
                return Ok(CommandResult::failure(EXIT_PROBLEMS));
            }
            Err(e) => return Err(e),
        };
        debug!(catalog = %shown, problems = diagnostics.len(), "check complete");

        self.report(&shown, &diagnostics, ui)?;

        if diagnostics.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_PROBLEMS))
        }
    }

    fn report(
        &self,
        shown: &str,
        diagnostics: &[LintDiagnostic],
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Human => {
                if diagnostics.is_empty() {
                    ui.success(&format!("{shown} is valid"));
                    return Ok(());
                }
                HumanFormatter::new(ui.use_color()).format(diagnostics, &mut output)?;
            }
            OutputFormat::Json => {
                JsonFormatter::new()
                    .with_file(shown)
                    .format(diagnostics, &mut output)?;
            }
        }

        ui.message(String::from_utf8_lossy(&output).trim_end());
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui).or_else(|e| report_input_error(ui, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project(catalog: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("gradle")).unwrap();
        fs::write(temp.path().join("gradle/libs.versions.toml"), catalog).unwrap();
        temp
    }

    fn run(root: &Path, format: OutputFormat) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(CommandContext::new(root), CheckArgs { format });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn clean_catalog_passes() {
        let temp = project("[versions]\nkotlin = \"2.0.0\"\n");

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert!(result.success);
        assert_eq!(ui.successes(), ["gradle/libs.versions.toml is valid".to_string()]);
    }

    #[test]
    fn violations_are_reported_with_exit_code_one() {
        let temp = project("[versions]\nb = \"1\"\na = \"2\"\n");

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message(
            "Line 2: Entries are not sorted alphabetically in section '[versions]'. Found alias 'b' where 'a' was expected."
        ));
        assert!(ui.has_message("Found 2 problem(s)"));
    }

    #[test]
    fn empty_catalog_warns() {
        let temp = project("# nothing yet\n");

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert!(result.success);
        assert_eq!(
            ui.warnings(),
            ["gradle/libs.versions.toml declares no catalog entries".to_string()]
        );
    }

    #[test]
    fn json_output_names_catalog() {
        let temp = project("[versions]\nkotlin = \"2.0.0\"\n");

        let (result, ui) = run(temp.path(), OutputFormat::Json);

        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["file"], "gradle/libs.versions.toml");
        assert_eq!(json["summary"]["total"], 0);
    }

    #[test]
    fn missing_catalog_exits_with_two() {
        let temp = TempDir::new().unwrap();

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Version catalog not found"));
    }

    #[test]
    fn malformed_entry_exits_with_two() {
        let temp = project("[bundles]\ngroovy = \"groovy\"\n");

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Line 2: Entry with alias 'groovy' must be"));
    }

    #[test]
    fn bom_problems_are_reported_as_errors() {
        let temp = project("[libraries]\nspring = { module = \"org.springframework:spring-core\" }\n");
        fs::write(
            temp.path().join(".catalog-lint.yml"),
            "boms:\n  spring-bom:\n    - spring\n",
        )
        .unwrap();

        let (result, ui) = run(temp.path(), OutputFormat::Human);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("spring-bom"));
    }
}
