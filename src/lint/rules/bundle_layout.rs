//! Bundle rules.
//!
//! A bundle lists library aliases. The aliases must be sorted, and the
//! array must be laid out one alias per line:
//!
//! ```text
//! groovy = [
//!     "groovy-core",
//!     "groovy-json"
//! ]
//! ```

use crate::catalog::{LineSpan, Section};
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

const INDENT: &str = "    ";

/// Requires the aliases inside each bundle to be sorted.
pub struct BundleOrderRule;

impl LintRule for BundleOrderRule {
    fn id(&self) -> RuleId {
        RuleId::new("bundle-order")
    }

    fn name(&self) -> &str {
        "Bundle Order"
    }

    fn description(&self) -> &str {
        "Libraries of a bundle must be sorted alphabetically"
    }

    fn applies_to(&self, section: Section) -> bool {
        section == Section::Bundles
    }

    fn check(&self, entries: &[ParsedEntry<'_>], _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for entry in entries {
            let Some(found) = entry.value().as_string_array() else {
                continue;
            };
            let mut expected = found.clone();
            expected.sort_unstable();

            let span = entry.span();
            for (index, (found, expected)) in found.iter().zip(&expected).enumerate() {
                if found == expected {
                    continue;
                }
                let line = if span.is_single_line() {
                    span.start
                } else {
                    span.start + index + 1
                };
                diagnostics.push(LintDiagnostic::new(
                    self.id(),
                    LineSpan::line(line),
                    format!(
                        "Libraries of bundle with alias '{}' are not sorted alphabetically. Found library '{}' where '{}' was expected.",
                        entry.alias(),
                        found,
                        expected
                    ),
                ));
            }
        }

        diagnostics
    }
}

/// Requires one alias per line, indented by four spaces.
pub struct BundleIndentationRule;

/// Whether the bundle text has the canonical multi-line layout for
/// `elements` aliases.
pub fn is_bundle_indented(content: &str, elements: usize) -> bool {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() != elements + 2 {
        return false;
    }

    let (first, rest) = match lines.split_first() {
        Some(split) => split,
        None => return false,
    };
    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return false,
    };

    strip_comment(first).trim_end().ends_with('[')
        && last.starts_with(']')
        && middle.iter().all(|line| {
            line.strip_prefix(INDENT)
                .is_some_and(|rest| rest.starts_with(|c: char| !c.is_whitespace()))
        })
}

/// The line up to a `#` that isn't inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '#' => return &line[..i],
            None => {}
        }
    }
    line
}

impl LintRule for BundleIndentationRule {
    fn id(&self) -> RuleId {
        RuleId::new("bundle-indentation")
    }

    fn name(&self) -> &str {
        "Bundle Indentation"
    }

    fn description(&self) -> &str {
        "Bundles must list one library per line, indented by four spaces"
    }

    fn applies_to(&self, section: Section) -> bool {
        section == Section::Bundles
    }

    fn check(&self, entries: &[ParsedEntry<'_>], _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| {
                let elements = e.value().as_array().map_or(0, |items| items.len());
                !is_bundle_indented(e.content(), elements)
            })
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Bundle with alias '{}' must be indented with each library on a separate line preceded by four whitespace characters.",
                        e.alias()
                    ),
                )
            })
            .collect()
    }
}
