//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! problems found in a catalog, located by the lines of the offending entry
//! (or of a single bundle element).

use std::cmp::Ordering;
use std::fmt;

use super::rule::RuleId;
use crate::catalog::LineSpan;

/// A diagnostic message produced by a lint rule.
///
/// Diagnostics sort by span start, then span end, then message text. The
/// rule ID only breaks ties between otherwise identical diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Lines the diagnostic refers to.
    pub span: LineSpan,
    /// Human-readable message.
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, span: LineSpan, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            span,
            message: message.into(),
        }
    }
}

impl Ord for LintDiagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span
            .cmp(&other.span)
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.rule_id.cmp(&other.rule_id))
    }
}

impl PartialOrd for LintDiagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders as `Line N: message` or `Lines N-M: message`.
impl fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}
