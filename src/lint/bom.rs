//! BOM cross-reference checks.
//!
//! Before any per-entry rule runs, the BOM settings are matched against the
//! `[libraries]` section: every configured alias must name a declared
//! library, and every BOM must resolve to a coordinate whose name ends in
//! `-bom` or `-dependencies`. Problems found here are reported as plain
//! sentences rather than line-located diagnostics.

use std::collections::BTreeSet;

use tracing::debug;

use super::rule::ParsedEntry;
use crate::catalog::Value;
use crate::config::BomRegistry;

const BOM_SUFFIXES: [&str; 2] = ["-bom", "-dependencies"];

/// Check the BOM settings against the parsed `[libraries]` entries.
///
/// Returns one sentence per kind of problem; empty when the settings match.
pub fn check_bom_declarations(libraries: &[ParsedEntry<'_>], boms: &BomRegistry) -> Vec<String> {
    let mut problems = Vec::new();
    if boms.is_empty() {
        return problems;
    }

    let declared: BTreeSet<&str> = libraries.iter().map(|e| e.alias()).collect();

    let missing: Vec<&str> = boms
        .boms()
        .chain(boms.dependents())
        .filter(|alias| !declared.contains(alias))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !missing.is_empty() {
        let noun = if missing.len() == 1 { "alias" } else { "aliases" };
        problems.push(format!(
            "The following {} in the version catalog linter settings cannot be matched with a library in the version catalog: {}",
            noun,
            quote_all(&missing)
        ));
    }

    let invalid: Vec<&str> = libraries
        .iter()
        .filter(|e| boms.is_bom(e.alias()))
        .filter(|e| {
            coordinate_name(e.value())
                .is_some_and(|name| !BOM_SUFFIXES.iter().any(|s| name.ends_with(s)))
        })
        .map(|e| e.alias())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if !invalid.is_empty() {
        problems.push(format!(
            "The libraries identified by the following aliases do not seem to be proper BOMs as their names do not end with the suffix '-bom' or '-dependencies': {}",
            quote_all(&invalid)
        ));
    }

    debug!(
        boms = boms.len(),
        problems = problems.len(),
        "checked BOM declarations"
    );
    problems
}

/// The artifact name a library declaration resolves to.
pub fn coordinate_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(notation) => {
            let parts: Vec<&str> = notation.split(':').collect();
            match parts.len() {
                2 | 3 => Some(parts[1]),
                _ => Some(notation.as_str()),
            }
        }
        Value::Table(table) => {
            if let Some(module) = table.get_str("module") {
                let parts: Vec<&str> = module.split(':').collect();
                if parts.len() == 2 {
                    Some(parts[1])
                } else {
                    Some(module)
                }
            } else {
                table.get_str("name")
            }
        }
        Value::Array(_) => None,
    }
}

fn quote_all(aliases: &[&str]) -> String {
    aliases
        .iter()
        .map(|a| format!("'{}'", a))
        .collect::<Vec<_>>()
        .join(", ")
}
