//! Plugin attribute order.

use crate::catalog::Section;
use crate::lint::{LintContext, LintDiagnostic, LintRule, ParsedEntry, RuleId};

/// Requires plugins to be inline tables starting with `id`.
pub struct PluginAttributesRule;

impl LintRule for PluginAttributesRule {
    fn id(&self) -> RuleId {
        RuleId::new("plugin-attributes")
    }

    fn name(&self) -> &str {
        "Plugin Attributes"
    }

    fn description(&self) -> &str {
        "Plugins must declare id first, followed by version or version.ref"
    }

    fn applies_to(&self, section: Section) -> bool {
        section == Section::Plugins
    }

    fn check(&self, entries: &[ParsedEntry<'_>], _ctx: &LintContext<'_>) -> Vec<LintDiagnostic> {
        entries
            .iter()
            .filter(|e| {
                e.value()
                    .as_table()
                    .and_then(|t| t.keys().next())
                    .is_none_or(|first| first != "id")
            })
            .map(|e| {
                LintDiagnostic::new(
                    self.id(),
                    e.span(),
                    format!(
                        "Attributes of plugin with alias '{}' are not sorted correctly. Required order: id, version(.ref)",
                        e.alias()
                    ),
                )
            })
            .collect()
    }
}
