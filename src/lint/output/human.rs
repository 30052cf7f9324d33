//! Human-readable output formatter.
//!
//! Prints one rendered diagnostic per line, with optional color support,
//! followed by a summary line.

use std::io::Write;

use console::Style;

use super::LintFormatter;
use crate::lint::LintDiagnostic;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn location_style(&self) -> Style {
        if self.use_color {
            Style::new().yellow().bold().force_styling(true)
        } else {
            Style::new().force_styling(false)
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let location = self.location_style();

        for diag in diagnostics {
            writeln!(
                writer,
                "{}: {}",
                location.apply_to(diag.span),
                diag.message
            )?;
        }

        if !diagnostics.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Found {} problem(s)", diagnostics.len())?;
        }

        Ok(())
    }
}
