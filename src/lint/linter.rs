//! Catalog validation entry points.
//!
//! [`CatalogLinter`] runs the registered rules section by section and
//! merges the results into one ordered list. The BOM cross-reference check
//! runs first and fails on its own, before any per-entry rule.

use tracing::debug;

use super::bom::check_bom_declarations;
use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::rule::{LintContext, ParsedEntry};
use crate::catalog::{Catalog, Entry, Section};
use crate::config::BomRegistry;
use crate::error::{CatalogError, Result};

/// Validates catalogs against a rule registry and BOM settings.
pub struct CatalogLinter {
    registry: RuleRegistry,
    boms: BomRegistry,
}

impl CatalogLinter {
    /// Create a linter with all built-in rules.
    pub fn new(boms: BomRegistry) -> Self {
        Self::with_registry(RuleRegistry::with_builtins(), boms)
    }

    /// Create a linter with a custom rule set.
    pub fn with_registry(registry: RuleRegistry, boms: BomRegistry) -> Self {
        Self { registry, boms }
    }

    /// The BOM settings this linter checks against.
    pub fn boms(&self) -> &BomRegistry {
        &self.boms
    }

    /// Check the entries of one section.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry` or `UnexpectedValue` if an entry can't be
    /// interpreted. Rule violations are returned as diagnostics, sorted.
    pub fn check_section(&self, section: Section, entries: &[Entry]) -> Result<Vec<LintDiagnostic>> {
        let parsed = ParsedEntry::parse_all(section, entries)?;
        Ok(self.run_rules(section, &parsed))
    }

    /// Check `[versions]` entries.
    pub fn check_versions(&self, entries: &[Entry]) -> Result<Vec<LintDiagnostic>> {
        self.check_section(Section::Versions, entries)
    }

    /// Check `[libraries]` entries.
    pub fn check_libraries(&self, entries: &[Entry]) -> Result<Vec<LintDiagnostic>> {
        self.check_section(Section::Libraries, entries)
    }

    /// Check `[bundles]` entries.
    pub fn check_bundles(&self, entries: &[Entry]) -> Result<Vec<LintDiagnostic>> {
        self.check_section(Section::Bundles, entries)
    }

    /// Check `[plugins]` entries.
    pub fn check_plugins(&self, entries: &[Entry]) -> Result<Vec<LintDiagnostic>> {
        self.check_section(Section::Plugins, entries)
    }

    /// Check a whole catalog and return every diagnostic, sorted.
    ///
    /// # Errors
    ///
    /// Returns `BomDeclarations` if the BOM settings don't match the
    /// catalog, or a structural error if any entry can't be interpreted.
    pub fn lint(&self, catalog: &Catalog) -> Result<Vec<LintDiagnostic>> {
        let mut parsed = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            parsed.push((section, ParsedEntry::parse_all(section, catalog.section(section))?));
        }

        let libraries = parsed
            .iter()
            .find(|(section, _)| *section == Section::Libraries)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default();
        let problems = check_bom_declarations(libraries, &self.boms);
        if !problems.is_empty() {
            return Err(CatalogError::BomDeclarations { problems });
        }

        let mut diagnostics: Vec<LintDiagnostic> = parsed
            .iter()
            .flat_map(|(section, entries)| self.run_rules(*section, entries))
            .collect();
        diagnostics.sort();

        debug!(
            entries = catalog.len(),
            diagnostics = diagnostics.len(),
            "linted catalog"
        );
        Ok(diagnostics)
    }

    /// Check a whole catalog, failing if anything is wrong.
    ///
    /// # Errors
    ///
    /// Returns `Violations` with every diagnostic in reporting order, or
    /// any error [`lint`](Self::lint) returns.
    pub fn check(&self, catalog: &Catalog) -> Result<()> {
        let diagnostics = self.lint(catalog)?;
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Violations { diagnostics })
        }
    }

    fn run_rules(&self, section: Section, entries: &[ParsedEntry<'_>]) -> Vec<LintDiagnostic> {
        let ctx = LintContext {
            section,
            boms: &self.boms,
        };

        let mut diagnostics = Vec::new();
        for rule in self.registry.for_section(section) {
            let found = rule.check(entries, &ctx);
            debug!(rule = %rule.id(), %section, count = found.len(), "ran rule");
            diagnostics.extend(found);
        }
        diagnostics.sort();
        diagnostics
    }
}

impl Default for CatalogLinter {
    fn default() -> Self {
        Self::new(BomRegistry::default())
    }
}
