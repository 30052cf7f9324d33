//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`ParsedEntry`] - A catalog entry together with its parsed declaration
//! - [`LintContext`] - What a rule may know besides the entries it checks

use super::diagnostic::LintDiagnostic;
use crate::catalog::{Declaration, Entry, LineSpan, Section, Value};
use crate::config::BomRegistry;
use crate::error::{CatalogError, Result};

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry paired with its parsed alias and value.
#[derive(Debug, Clone)]
pub struct ParsedEntry<'a> {
    pub entry: &'a Entry,
    pub declaration: Declaration,
}

impl<'a> ParsedEntry<'a> {
    /// Parse every entry of a section.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry` for the first entry whose notation can't be
    /// parsed, and `UnexpectedValue` for a bundle that isn't an array of
    /// strings.
    pub fn parse_all(section: Section, entries: &'a [Entry]) -> Result<Vec<ParsedEntry<'a>>> {
        entries
            .iter()
            .map(|entry| ParsedEntry::parse(section, entry))
            .collect()
    }

    /// Parse a single entry of `section`.
    pub fn parse(section: Section, entry: &'a Entry) -> Result<ParsedEntry<'a>> {
        let declaration = entry.declaration()?;

        if section == Section::Bundles && declaration.value.as_string_array().is_none() {
            return Err(CatalogError::UnexpectedValue {
                span: entry.span,
                alias: declaration.alias,
                expected: "an array of library aliases".to_string(),
            });
        }

        Ok(ParsedEntry { entry, declaration })
    }

    /// The entry's alias.
    pub fn alias(&self) -> &str {
        &self.declaration.alias
    }

    /// The entry's value.
    pub fn value(&self) -> &Value {
        &self.declaration.value
    }

    /// Lines the entry occupies.
    pub fn span(&self) -> LineSpan {
        self.entry.span
    }

    /// Raw entry text.
    pub fn content(&self) -> &str {
        &self.entry.content
    }
}

/// Read-only inputs shared by all rules checking one section.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// The section being checked.
    pub section: Section,
    /// BOM aliases and the library aliases they cover.
    pub boms: &'a BomRegistry,
}

/// A lint rule that validates the entries of a catalog section.
///
/// Each rule checks for a specific issue and produces one diagnostic per
/// occurrence. Rules never stop at the first problem.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Whether this rule checks entries of `section`.
    fn applies_to(&self, section: Section) -> bool;

    /// Check the section's entries (in source order) and return any
    /// diagnostics.
    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic>;
}
