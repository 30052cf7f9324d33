//! Alphabetical ordering of section entries.
//!
//! Entries are compared by their trimmed text, so the alias decides the
//! order and ties fall through to the value.

use crate::catalog::Section;
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

/// Requires the entries of every section to be sorted.
pub struct AlphabeticalOrderRule;

impl LintRule for AlphabeticalOrderRule {
    fn id(&self) -> RuleId {
        RuleId::new("alphabetical-order")
    }

    fn name(&self) -> &str {
        "Alphabetical Order"
    }

    fn description(&self) -> &str {
        "Entries of a section must be sorted alphabetically"
    }

    fn applies_to(&self, _section: Section) -> bool {
        true
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        let mut sorted: Vec<&ParsedEntry<'_>> = entries.iter().collect();
        sorted.sort_by(|a, b| a.content().trim().cmp(b.content().trim()));

        entries
            .iter()
            .zip(sorted)
            .filter(|(found, expected)| found.content().trim() != expected.content().trim())
            .map(|(found, expected)| {
                LintDiagnostic::new(
                    self.id(),
                    found.span(),
                    format!(
                        "Entries are not sorted alphabetically in section '{}'. Found alias '{}' where '{}' was expected.",
                        ctx.section.label(),
                        found.alias(),
                        expected.alias()
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
    fn reports_every_displaced_entry() {
        let entries = lines(&[r#"cache2k = "2.0.0.Final""#, r#"byteBuddy = "1.12.9""#]);

        let diagnostics = run(&AlphabeticalOrderRule, Section::Versions, &entries, &BomRegistry::default());

        assert_eq!(
            diagnostics,
            vec![
                "Line 1: Entries are not sorted alphabetically in section '[versions]'. Found alias 'cache2k' where 'byteBuddy' was expected.",
                "Line 2: Entries are not sorted alphabetically in section '[versions]'. Found alias 'byteBuddy' where 'cache2k' was expected.",
            ]
        );
    }

    #[test]
    fn sorted_entries_pass() {
        let entries = lines(&[
            r#"axis = "1.3""#,
            r#"byteBuddy = "1.12.9""#,
            r#"cache2k = "2.0.0.Final""#,
        ]);

        assert!(run(&AlphabeticalOrderRule, Section::Versions, &entries, &BomRegistry::default()).is_empty());
    }

    #[test]
    fn leading_whitespace_does_not_affect_order() {
        let entries = lines(&[r#"axis = "1.3""#, r#" byteBuddy = "1.12.9""#]);

        assert!(run(&AlphabeticalOrderRule, Section::Versions, &entries, &BomRegistry::default()).is_empty());
    }

    #[test]
    fn only_displaced_entries_are_reported() {
        let entries = lines(&[
            r#"a = { id = "a" }"#,
            r#"c = { id = "c" }"#,
            r#"b = { id = "b" }"#,
            r#"d = { id = "d" }"#,
        ]);

        let diagnostics = run(&AlphabeticalOrderRule, Section::Plugins, &entries, &BomRegistry::default());

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].starts_with("Line 2: "));
        assert!(diagnostics[0].ends_with("Found alias 'c' where 'b' was expected."));
        assert!(diagnostics[1].starts_with("Line 3: "));
    }
}
