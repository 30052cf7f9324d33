//! Configuration validation rules.
//!
//! This module validates the linter configuration after parsing:
//! - BOM and dependent aliases must not be blank
//! - A catalog path, when given, must not be empty

use crate::config::schema::LinterConfig;
use crate::error::{CatalogError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &LinterConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config
        .catalog
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        errors.push(ValidationError::new(
            "empty-catalog-path",
            "'catalog' must not be empty".to_string(),
        ));
    }

    for bom in config.boms.boms() {
        if bom.trim().is_empty() {
            errors.push(ValidationError::new(
                "blank-bom-alias",
                "BOM aliases must not be blank".to_string(),
            ));
        }

        for dependent in config.boms.dependents_of(bom).unwrap_or_default() {
            if dependent.trim().is_empty() {
                errors.push(ValidationError::new(
                    "blank-dependent-alias",
                    format!("BOM '{}' lists a blank dependent alias", bom),
                ));
            }
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &LinterConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CatalogError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
