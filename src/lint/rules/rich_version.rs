//! Attribute order of rich versions.
//!
//! A rich version is an inline table of constraints. Whatever subset of
//! `strictly`, `require`, `prefer` and `reject` is present must appear in
//! that relative order. Other attributes are ignored.

use crate::catalog::{InlineTable, Section, Value};
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

/// Constraint attributes in their required order.
pub const RICH_VERSION_ORDER: [&str; 4] = ["strictly", "require", "prefer", "reject"];

/// Requires rich version constraints in `strictly, require, prefer, reject`
/// order, both in `[versions]` and in a library's nested `version` table.
pub struct RichVersionOrderRule;

/// Whether the constraint attributes present in `table` are in order.
pub fn is_rich_version_sorted(table: &InlineTable) -> bool {
    let positions: Vec<usize> = table
        .keys()
        .filter_map(|k| RICH_VERSION_ORDER.iter().position(|c| *c == k))
        .collect();
    positions.windows(2).all(|w| w[0] < w[1])
}

impl LintRule for RichVersionOrderRule {
    fn id(&self) -> RuleId {
        RuleId::new("rich-version-order")
    }

    fn name(&self) -> &str {
        "Rich Version Order"
    }

    fn description(&self) -> &str {
        "Rich version constraints must be ordered strictly, require, prefer, reject"
    }

    fn applies_to(&self, section: Section) -> bool {
        matches!(section, Section::Versions | Section::Libraries)
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| {
                let rich = match (ctx.section, e.value()) {
                    (Section::Versions, Value::Table(table)) => Some(table),
                    (Section::Libraries, Value::Table(table)) => table.get_table("version"),
                    _ => None,
                };
                rich.is_some_and(|t| !is_rich_version_sorted(t))
            })
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Version attributes of entry with alias '{}' are not sorted correctly. Required order: {}",
                        e.alias(),
                        RICH_VERSION_ORDER.join(", ")
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BomRegistry;
    use crate::lint::rules::test_support::{lines, run};

    #[test]
    fn flags_unsorted_rich_version() {
        let entries = lines(&[r#"slf4j = { prefer = "1.7.25", strictly = "[1.7, 1.8[" }"#]);

        let diagnostics = run(&RichVersionOrderRule, Section::Versions, &entries, &BomRegistry::default());

        assert_eq!(
            diagnostics,
            vec!["Line 1: Version attributes of entry with alias 'slf4j' are not sorted correctly. Required order: strictly, require, prefer, reject"]
        );
    }

    #[test]
    fn accepts_sorted_rich_version() {
        let entries = lines(&[r#"slf4j = { strictly = "[1.7, 1.8[", prefer = "1.7.25" }"#]);

        assert!(run(&RichVersionOrderRule, Section::Versions, &entries, &BomRegistry::default()).is_empty());
    }

    #[test]
    fn checks_nested_library_version() {
        let entries = lines(&[
            r#"groovy = { group = "org.codehaus.groovy", name = "groovy", version = { reject = ["3.0.0"], require = "3.0.5" } }"#,
            r#"spock = { group = "org.spockframework", name = "spock-core", version = { require = "2.3", reject = ["2.0"] } }"#,
        ]);

        let diagnostics = run(&RichVersionOrderRule, Section::Libraries, &entries, &BomRegistry::default());

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].starts_with("Line 1: Version attributes of entry with alias 'groovy'"));
    }

    #[test]
    fn version_references_are_not_rich_versions() {
        let entries = lines(&[r#"groovy = { group = "g", name = "n", version.ref = "groovy" }"#]);

        assert!(run(&RichVersionOrderRule, Section::Libraries, &entries, &BomRegistry::default()).is_empty());
    }

    #[test]
    fn other_attributes_are_ignored() {
        let entries = lines(&[r#"kotlin = { because = "x", require = "2.0", reject = "1.9" }"#]);

        assert!(run(&RichVersionOrderRule, Section::Versions, &entries, &BomRegistry::default()).is_empty());
    }
}
