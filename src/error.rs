//! Error types for catalog-lint operations.
//!
//! This module defines [`CatalogError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural problems (missing catalog, malformed entry notation) abort
//!   the whole operation
//! - Rule violations are collected and surfaced together as one
//!   [`CatalogError::Violations`] value
//! - Use `anyhow::Error` (via `CatalogError::Other`) for unexpected errors

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::LineSpan;
use crate::lint::LintDiagnostic;

/// Core error type for catalog-lint operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document does not exist.
    #[error("Version catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// An entry's notation could not be parsed.
    #[error("{span}: Malformed entry: {message}")]
    MalformedEntry { span: LineSpan, message: String },

    /// Well-formed notation with a value shape the section doesn't allow.
    #[error("{span}: Entry with alias '{alias}' must be {expected}")]
    UnexpectedValue {
        span: LineSpan,
        alias: String,
        expected: String,
    },

    /// BOM settings that don't match the catalog.
    #[error("{}", problems.join("\n"))]
    BomDeclarations { problems: Vec<String> },

    /// Rule violations, in reporting order.
    #[error("{}", render_diagnostics(diagnostics))]
    Violations { diagnostics: Vec<LintDiagnostic> },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn render_diagnostics(diagnostics: &[LintDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for catalog-lint operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = CatalogError::CatalogNotFound {
            path: PathBuf::from("gradle/libs.versions.toml"),
        };
        assert!(err.to_string().contains("gradle/libs.versions.toml"));
    }

    #[test]
    fn malformed_entry_is_located() {
        let err = CatalogError::MalformedEntry {
            span: LineSpan::new(4, 6),
            message: "unbalanced brackets at column 9".into(),
        };
        assert_eq!(
            err.to_string(),
            "Lines 4-6: Malformed entry: unbalanced brackets at column 9"
        );
    }

    #[test]
    fn unexpected_value_names_alias() {
        let err = CatalogError::UnexpectedValue {
            span: LineSpan::line(3),
            alias: "groovy".into(),
            expected: "an array of library aliases".into(),
        };
        assert_eq!(
            err.to_string(),
            "Line 3: Entry with alias 'groovy' must be an array of library aliases"
        );
    }

    #[test]
    fn bom_declarations_joins_problems() {
        let err = CatalogError::BomDeclarations {
            problems: vec!["first".into(), "second".into()],
        };
        assert_eq!(err.to_string(), "first\nsecond");
    }

    #[test]
    fn violations_render_one_per_line() {
        let err = CatalogError::Violations {
            diagnostics: vec![
                LintDiagnostic::new(RuleId::new("a"), LineSpan::line(1), "one"),
                LintDiagnostic::new(RuleId::new("b"), LineSpan::new(2, 3), "two"),
            ],
        };
        assert_eq!(err.to_string(), "Line 1: one\nLines 2-3: two");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = CatalogError::ConfigParseError {
            path: PathBuf::from("/project/.catalog-lint.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/.catalog-lint.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = CatalogError::ConfigValidationError {
            message: "empty BOM alias".into(),
        };
        assert!(err.to_string().contains("empty BOM alias"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: CatalogError = anyhow::anyhow!("something went wrong").into();
        assert!(err.to_string().contains("something went wrong"));
    }
}
