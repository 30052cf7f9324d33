//! Library notation rules.
//!
//! Libraries must use table notation with the coordinate first: either
//! `module` followed by a version attribute, or `group` followed by `name`.
//! A library without any version is only allowed when a BOM in the linter
//! settings lists it as a dependent.

use crate::catalog::{InlineTable, Section, Value};
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

const REQUIRED_ORDER: &str = "Required order: [module | group], name (, version(.ref))";

/// Requires table notation and coordinate-first attribute order.
pub struct LibraryAttributesRule;

/// Whether the table's leading attributes are in the required order.
pub fn is_library_sorted(table: &InlineTable) -> bool {
    let keys: Vec<&str> = table.keys().take(2).collect();
    match keys.as_slice() {
        ["module", second] => second.starts_with("version"),
        ["group", second] => *second == "name",
        [_, _] => false,
        [first] => matches!(*first, "module" | "group"),
        _ => false,
    }
}

impl LintRule for LibraryAttributesRule {
    fn id(&self) -> RuleId {
        RuleId::new("library-attributes")
    }

    fn name(&self) -> &str {
        "Library Attributes"
    }

    fn description(&self) -> &str {
        "Libraries must use table notation with module or group and name first"
    }

    fn applies_to(&self, section: Section) -> bool {
        section == Section::Libraries
    }

    fn check(&self, entries: &[ParsedEntry<'_>], _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter_map(|e| {
                let message = match e.value() {
                    Value::Table(table) if is_library_sorted(table) => return None,
                    Value::Table(_) => format!(
                        "Attributes of library with alias '{}' are not sorted correctly. {}",
                        e.alias(),
                        REQUIRED_ORDER
                    ),
                    Value::String(_) | Value::Array(_) => format!(
                        "Use table notation instead of string notation for library with alias '{}'. {}",
                        e.alias(),
                        REQUIRED_ORDER
                    ),
                };
                Some(LintDiagnostic::new(self.id(), e.span(), message))
            })
            .collect()
    }
}

/// Requires version-less libraries to be covered by a BOM.
pub struct LibraryBomCoverageRule;

/// Whether the table declares only a coordinate and no version.
fn is_versionless(table: &InlineTable) -> bool {
    let keys: Vec<&str> = table.keys().collect();
    match keys.as_slice() {
        ["module"] | ["group"] => true,
        [_, _] => table.get_str("group").is_some() && table.get_str("name").is_some(),
        _ => false,
    }
}

impl LintRule for LibraryBomCoverageRule {
    fn id(&self) -> RuleId {
        RuleId::new("library-bom-coverage")
    }

    fn name(&self) -> &str {
        "Library BOM Coverage"
    }

    fn description(&self) -> &str {
        "Libraries without a version must be listed as dependents of a BOM"
    }

    fn applies_to(&self, section: Section) -> bool {
        section == Section::Libraries
    }

    fn check(&self, entries: &[ParsedEntry<'_>], ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| {
                e.value().as_table().is_some_and(is_versionless) && !ctx.boms.is_dependent(e.alias())
            })
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Library with alias '{}' has no version defined and no BOM declaration exists for it.",
                        e.alias()
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

    fn quarkus_boms() -> BomRegistry {
        BomRegistry::from_iter([("quarkus", vec!["quarkusArc"])])
    }

    #[test]
    fn flags_string_notation() {
        let entries = lines(&[r#"antlr = "antlr:antlr:2.7.7""#]);

        let diagnostics = run(&LibraryAttributesRule, Section::Libraries, &entries, &BomRegistry::default());

        assert_eq!(
            diagnostics,
            vec!["Line 1: Use table notation instead of string notation for library with alias 'antlr'. Required order: [module | group], name (, version(.ref))"]
        );
    }

    #[test]
    fn flags_unsorted_attributes() {
        let entries = lines(&[
            r#"activation = { name = "javax.activation", group = "com.sun.activation", version = "1.2.0" }"#,
            r#"apacheHttpMime = { group = "org.apache.httpcomponents", version = "4.5.14", name = "httpmime" }"#,
            r#"arc = { version.ref = "quarkus", module = "io.quarkus:quarkus-arc" }"#,
        ]);

        let diagnostics = run(&LibraryAttributesRule, Section::Libraries, &entries, &BomRegistry::default());

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            diagnostics[1],
            "Line 2: Attributes of library with alias 'apacheHttpMime' are not sorted correctly. Required order: [module | group], name (, version(.ref))"
        );
    }

    #[test]
    fn accepts_canonical_attribute_orders() {
        let entries = lines(&[
            r#"a = { group = "org.owasp.antisamy", name = "antisamy", version = "1.5.2" }"#,
            r#"b = { module = "io.quarkus:quarkus-arc", version.ref = "quarkus" }"#,
            r#"c = { module = "io.quarkus:quarkus-bom", version = { strictly = "3.0" } }"#,
            r#"d = { module = "io.quarkus:quarkus-arc" }"#,
            r#"e = { group = "io.quarkus", name = "quarkus-arc" }"#,
        ]);

        assert!(run(&LibraryAttributesRule, Section::Libraries, &entries, &BomRegistry::default()).is_empty());
    }

    #[test]
    fn single_non_coordinate_attribute_is_unsorted() {
        let entries = lines(&[r#"x = { name = "foo" }"#, r#"y = { }"#]);

        assert_eq!(
            run(&LibraryAttributesRule, Section::Libraries, &entries, &BomRegistry::default()).len(),
            2
        );
    }

    #[test]
    fn flags_versionless_library_without_bom() {
        let entries = lines(&[r#"quarkusArc = { module = "io.quarkus:quarkus-arc" }"#]);

        let diagnostics = run(&LibraryBomCoverageRule, Section::Libraries, &entries, &BomRegistry::default());

        assert_eq!(
            diagnostics,
            vec!["Line 1: Library with alias 'quarkusArc' has no version defined and no BOM declaration exists for it."]
        );
    }

    #[test]
    fn bom_dependents_may_omit_version() {
        let entries = lines(&[
            r#"quarkusArc = { module = "io.quarkus:quarkus-arc" }"#,
            r#"quarkusCore = { group = "io.quarkus", name = "quarkus-core" }"#,
        ]);

        let diagnostics = run(&LibraryBomCoverageRule, Section::Libraries, &entries, &quarkus_boms());

        assert_eq!(
            diagnostics,
            vec!["Line 2: Library with alias 'quarkusCore' has no version defined and no BOM declaration exists for it."]
        );
    }

    #[test]
    fn versioned_libraries_need_no_bom() {
        let entries = lines(&[
            r#"a = { group = "g", name = "n", version = "1" }"#,
            r#"b = { module = "g:n", version.ref = "v" }"#,
        ]);

        assert!(run(&LibraryBomCoverageRule, Section::Libraries, &entries, &BomRegistry::default()).is_empty());
    }
}
