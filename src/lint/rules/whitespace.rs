//! Whitespace rules shared by all sections.
//!
//! Entries must not start or end with whitespace, and must not contain runs
//! of two or more spaces. Bundles are exempt from the last rule since their
//! continuation lines are indented on purpose.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Section;
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

static ADJACENT_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("ADJACENT_SPACES must compile"));

/// Flags entries whose first line starts with whitespace.
pub struct LeadingWhitespaceRule;

impl LintRule for LeadingWhitespaceRule {
    fn id(&self) -> RuleId {
        RuleId::new("leading-whitespace")
    }

    fn name(&self) -> &str {
        "Leading Whitespace"
    }

    fn description(&self) -> &str {
        "Entries must start at the beginning of the line"
    }

    fn applies_to(&self, _section: Section) -> bool {
        true
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| e.content().starts_with(char::is_whitespace))
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Entry with alias '{}' in section '{}' must not have leading whitespace.",
                        e.alias(),
                        ctx.section.label()
                    ),
                )
            })
            .collect()
    }
}

/// Flags entries that end with whitespace.
pub struct TrailingWhitespaceRule;

impl LintRule for TrailingWhitespaceRule {
    fn id(&self) -> RuleId {
        RuleId::new("trailing-whitespace")
    }

    fn name(&self) -> &str {
        "Trailing Whitespace"
    }

    fn description(&self) -> &str {
        "Entries must not end with whitespace"
    }

    fn applies_to(&self, _section: Section) -> bool {
        true
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| e.content().ends_with(char::is_whitespace))
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Entry with alias '{}' in section '{}' must not have trailing whitespace.",
                        e.alias(),
                        ctx.section.label()
                    ),
                )
            })
            .collect()
    }
}

/// Flags entries containing two or more adjacent spaces.
pub struct AdjacentWhitespaceRule;

impl LintRule for AdjacentWhitespaceRule {
    fn id(&self) -> RuleId {
        RuleId::new("adjacent-whitespace")
    }

    fn name(&self) -> &str {
        "Adjacent Whitespace"
    }

    fn description(&self) -> &str {
        "Entries must not contain two or more adjacent spaces"
    }

    fn applies_to(&self, section: Section) -> bool {
        section != Section::Bundles
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| ADJACENT_SPACES.is_match(e.content()))
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Entry with alias '{}' in section '{}' must not have two or more adjacent whitespace characters.",
                        e.alias(),
                        ctx.section.label()
                    ),
                )
            })
            .collect()
    }
}
