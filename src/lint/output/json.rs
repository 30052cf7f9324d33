//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::LintFormatter;
use crate::lint::LintDiagnostic;

/// Formats lint output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    file: Option<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    start_line: usize,
    end_line: usize,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report diagnostics as belonging to `file`.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            file: self.file.as_deref(),
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    rule_id: &d.rule_id.0,
                    start_line: d.span.start,
                    end_line: d.span.end,
                    message: &d.message,
                })
                .collect(),
            summary: JsonSummary {
                total: diagnostics.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
