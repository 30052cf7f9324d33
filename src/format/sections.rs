//! Per-section canonical rendering.
//!
//! Each `format_*` function renders the entries of one section in canonical
//! notation and returns them sorted by their rendered text. Comments are
//! dropped. Attributes outside the canonical set follow the canonical ones
//! in source order.

use tracing::trace;

use crate::catalog::notation::{quote, render_key};
use crate::catalog::{Declaration, Entry, InlineTable, Value};
use crate::error::{CatalogError, Result};
use crate::lint::rules::rich_version::RICH_VERSION_ORDER;

use super::INDENT;

const LIBRARY_ATTRIBUTES: [&str; 4] = ["module", "group", "name", "version"];
const PLUGIN_ATTRIBUTES: [&str; 2] = ["id", "version"];

/// Render `[versions]` entries.
pub fn format_versions(entries: &[Entry]) -> Result<Vec<String>> {
    render_sorted(entries, |decl| match &decl.value {
        Value::Table(table) => format!("{} = {}", render_key(&decl.alias), rich_version(table)),
        other => fallback(decl, other),
    })
}

/// Render `[libraries]` entries in table notation.
pub fn format_libraries(entries: &[Entry]) -> Result<Vec<String>> {
    render_sorted(entries, |decl| {
        let alias = render_key(&decl.alias);
        match &decl.value {
            Value::String(notation) => {
                let parts: Vec<&str> = notation.split(':').collect();
                match parts.as_slice() {
                    [group, name, version] => format!(
                        "{} = {{ group = {}, name = {}, version = {} }}",
                        alias,
                        quote(group),
                        quote(name),
                        quote(version)
                    ),
                    [group, name] => format!(
                        "{} = {{ group = {}, name = {} }}",
                        alias,
                        quote(group),
                        quote(name)
                    ),
                    _ => format!("{} = {}", alias, quote(notation)),
                }
            }
            Value::Table(table) => {
                let mut parts = coordinate(table);
                parts.extend(version(table));
                parts.extend(extras(table, &LIBRARY_ATTRIBUTES));
                braced(&alias, &parts)
            }
            other => fallback(decl, other),
        }
    })
}

/// Render `[bundles]` entries one alias per line.
///
/// # Errors
///
/// Besides malformed notation, returns `UnexpectedValue` for a bundle whose
/// value isn't an array of strings.
pub fn format_bundles(entries: &[Entry]) -> Result<Vec<String>> {
    let mut rendered = Vec::with_capacity(entries.len());
    for entry in entries {
        let decl = entry.declaration()?;
        let Some(mut aliases) = decl.value.as_string_array() else {
            return Err(CatalogError::UnexpectedValue {
                span: entry.span,
                alias: decl.alias,
                expected: "an array of library aliases".to_string(),
            });
        };
        aliases.sort_unstable();

        let mut out = format!("{} = [\n", render_key(&decl.alias));
        let lines: Vec<String> = aliases
            .iter()
            .map(|a| format!("{}{}", INDENT, quote(a)))
            .collect();
        if !lines.is_empty() {
            out.push_str(&lines.join(",\n"));
            out.push('\n');
        }
        out.push(']');
        rendered.push(out);
    }
    rendered.sort();
    Ok(rendered)
}

/// Render `[plugins]` entries with `id` first.
pub fn format_plugins(entries: &[Entry]) -> Result<Vec<String>> {
    render_sorted(entries, |decl| match &decl.value {
        Value::Table(table) => {
            let mut parts = Vec::new();
            if let Some(id) = table.get_str("id") {
                parts.push(format!("id = {}", quote(id)));
            }
            parts.extend(version(table));
            parts.extend(extras(table, &PLUGIN_ATTRIBUTES));
            braced(&render_key(&decl.alias), &parts)
        }
        other => fallback(decl, other),
    })
}

fn render_sorted<F>(entries: &[Entry], render: F) -> Result<Vec<String>>
where
    F: Fn(&Declaration) -> String,
{
    let mut rendered = entries
        .iter()
        .map(|entry| entry.declaration().map(|decl| render(&decl)))
        .collect::<Result<Vec<_>>>()?;
    rendered.sort();
    trace!(count = rendered.len(), "rendered section");
    Ok(rendered)
}

/// `alias = value` with the value rendered as parsed.
fn fallback(decl: &Declaration, value: &Value) -> String {
    format!("{} = {}", render_key(&decl.alias), value)
}

fn braced(alias: &str, parts: &[String]) -> String {
    if parts.is_empty() {
        format!("{} = {{ }}", alias)
    } else {
        format!("{} = {{ {} }}", alias, parts.join(", "))
    }
}

/// `group`/`name` when the coordinate can be split, `module` otherwise.
fn coordinate(table: &InlineTable) -> Vec<String> {
    if let Some(module) = table.get_str("module") {
        return match module.split(':').collect::<Vec<_>>().as_slice() {
            [group, name] => vec![
                format!("group = {}", quote(group)),
                format!("name = {}", quote(name)),
            ],
            _ => vec![format!("module = {}", quote(module))],
        };
    }

    ["group", "name"]
        .into_iter()
        .filter_map(|key| table.get_str(key).map(|v| format!("{} = {}", key, quote(v))))
        .collect()
}

/// Attributes not in `known`, as `key = value`, in source order.
fn extras<'a>(table: &'a InlineTable, known: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    table
        .keys()
        .filter(|key| !known.contains(key))
        .filter_map(|key| {
            table
                .get(key)
                .map(|value| format!("{} = {}", render_key(key), value))
        })
}

/// The `version` attribute as a plain version, a reference, or a rich
/// version table. A `ref` next to other attributes stays inside the table.
fn version(table: &InlineTable) -> Option<String> {
    match table.get("version")? {
        Value::String(v) => Some(format!("version = {}", quote(v))),
        Value::Table(t) => match t.get_str("ref") {
            Some(reference) if t.len() == 1 => {
                Some(format!("version.ref = {}", quote(reference)))
            }
            _ => Some(format!("version = {}", rich_version(t))),
        },
        Value::Array(items) => Some(format!("version = {}", Value::Array(items.to_vec()))),
    }
}

/// Constraints in canonical order, with `reject` as a sorted list, then any
/// other attributes.
fn rich_version(table: &InlineTable) -> String {
    let mut parts: Vec<String> = RICH_VERSION_ORDER
        .iter()
        .filter_map(|key| {
            let rendered = match (*key, table.get(key)?) {
                ("reject", Value::String(v)) => format!("[ {} ]", quote(v)),
                ("reject", Value::Array(items)) => {
                    let mut rejected: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                    rejected.sort();
                    if rejected.is_empty() {
                        "[ ]".to_string()
                    } else {
                        format!("[ {} ]", rejected.join(", "))
                    }
                }
                (_, value) => value.to_string(),
            };
            Some(format!("{} = {}", key, rendered))
        })
        .collect();
    parts.extend(extras(table, &RICH_VERSION_ORDER));

    if parts.is_empty() {
        "{ }".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LineSpan;

    fn entries(contents: &[&str]) -> Vec<Entry> {
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| Entry::new(i + 1, *c))
            .collect()
    }

    #[test]
    fn formats_versions() {
        let formatted = format_versions(&entries(&[
            r#"cache2k =   "2.0.0.Final""#,
            r#" byteBuddy = "1.12.9""#,
            r#"springCore =   {require="4.2.9.RELEASE",reject=["4.3.18.RELEASE","4.3.16.RELEASE"]     }"#,
            r#"slf4j = { prefer = "1.7.25", strictly = "[1.7, 1.8[" }"#,
        ]))
        .unwrap();

        assert_eq!(
            formatted,
            vec![
                r#"byteBuddy = "1.12.9""#,
                r#"cache2k = "2.0.0.Final""#,
                r#"slf4j = { strictly = "[1.7, 1.8[", prefer = "1.7.25" }"#,
                r#"springCore = { require = "4.2.9.RELEASE", reject = [ "4.3.16.RELEASE", "4.3.18.RELEASE" ] }"#,
            ]
        );
    }

    #[test]
    fn string_reject_becomes_list() {
        let formatted = format_versions(&entries(&[r#"a = { reject = "1.0", require = "2.0" }"#])).unwrap();

        assert_eq!(formatted, vec![r#"a = { require = "2.0", reject = [ "1.0" ] }"#]);
    }

    #[test]
    fn empty_rich_version_renders_braces() {
        assert_eq!(format_versions(&entries(&["a = { }"])).unwrap(), vec!["a = { }"]);
    }

    #[test]
    fn formats_libraries() {
        let formatted = format_libraries(&entries(&[
            r#"antlr = "antlr:antlr:2.7.7""#,
            r#"activation =   { name = "javax.activation", group = "com.sun.activation", version = "1.2.0" }"#,
            r#"arc = { version.ref = "quarkus", module = "io.quarkus:quarkus-arc" }"#,
            r#"odd = { module = "a:b:c" }"#,
            r#"coreOnly = "org.example:core""#,
            r#"groovy = { name = "groovy", group = "org.codehaus.groovy", version = { reject = ["3.0.0"], strictly = "3.0.5" } }"#,
        ]))
        .unwrap();

        assert_eq!(
            formatted,
            vec![
                r#"activation = { group = "com.sun.activation", name = "javax.activation", version = "1.2.0" }"#,
                r#"antlr = { group = "antlr", name = "antlr", version = "2.7.7" }"#,
                r#"arc = { group = "io.quarkus", name = "quarkus-arc", version.ref = "quarkus" }"#,
                r#"coreOnly = { group = "org.example", name = "core" }"#,
                r#"groovy = { group = "org.codehaus.groovy", name = "groovy", version = { strictly = "3.0.5", reject = [ "3.0.0" ] } }"#,
                r#"odd = { module = "a:b:c" }"#,
            ]
        );
    }

    #[test]
    fn unsplittable_library_string_is_kept() {
        assert_eq!(
            format_libraries(&entries(&[r#"x = "just-a-name""#])).unwrap(),
            vec![r#"x = "just-a-name""#]
        );
    }

    #[test]
    fn formats_bundles() {
        let bundle = Entry::spanning(
            LineSpan::new(19, 22),
            "bar = [\n    \"antisamy\",\n    \"activation\"\n]",
        );
        let formatted = format_bundles(&[
            Entry::new(18, r#"foo = [ "antlr", "activation", "antisamy" ]"#),
            bundle,
        ])
        .unwrap();

        assert_eq!(
            formatted,
            vec![
                "bar = [\n    \"activation\",\n    \"antisamy\"\n]",
                "foo = [\n    \"activation\",\n    \"antisamy\",\n    \"antlr\"\n]",
            ]
        );
    }

    #[test]
    fn empty_bundle_keeps_brackets_on_separate_lines() {
        assert_eq!(format_bundles(&entries(&["e = []"])).unwrap(), vec!["e = [\n]"]);
    }

    #[test]
    fn non_array_bundle_is_rejected() {
        let err = format_bundles(&entries(&[r#"e = "x""#])).unwrap_err();

        assert!(matches!(err, CatalogError::UnexpectedValue { .. }));
    }

    #[test]
    fn formats_plugins() {
        let formatted = format_plugins(&entries(&[
            r#"shadowJar = { id = "com.github.johnrengelman.shadow", version = "8.1.1" }"#,
            r#"ktlint = { version.ref = "ktlint", id = "org.jlleitschuh.gradle.ktlint" }"#,
            r#"bare = { id = "a.b" }"#,
        ]))
        .unwrap();

        assert_eq!(
            formatted,
            vec![
                r#"bare = { id = "a.b" }"#,
                r#"ktlint = { id = "org.jlleitschuh.gradle.ktlint", version.ref = "ktlint" }"#,
                r#"shadowJar = { id = "com.github.johnrengelman.shadow", version = "8.1.1" }"#,
            ]
        );
    }

    #[test]
    fn keeps_attributes_outside_the_canonical_set() {
        assert_eq!(
            format_versions(&entries(&[r#"kotlin.version = "2.0""#])).unwrap(),
            vec![r#"kotlin = { version = "2.0" }"#]
        );
        assert_eq!(
            format_versions(&entries(&[r#"a = { because = "cve", prefer = "1.1", require = "1.0" }"#]))
                .unwrap(),
            vec![r#"a = { require = "1.0", prefer = "1.1", because = "cve" }"#]
        );
        assert_eq!(
            format_libraries(&entries(&[r#"x = { classifier = "jdk8", name = "n", group = "g", version = "1" }"#]))
                .unwrap(),
            vec![r#"x = { group = "g", name = "n", version = "1", classifier = "jdk8" }"#]
        );
        assert_eq!(
            format_plugins(&entries(&[r#"p = { apply = "false", id = "p.id" }"#])).unwrap(),
            vec![r#"p = { id = "p.id", apply = "false" }"#]
        );
    }

    #[test]
    fn version_reference_with_constraints_stays_a_table() {
        assert_eq!(
            format_libraries(&entries(&[r#"a = { group = "g", name = "n", version = { ref = "v", strictly = "1" } }"#]))
                .unwrap(),
            vec![r#"a = { group = "g", name = "n", version = { strictly = "1", ref = "v" } }"#]
        );
    }

    #[test]
    fn drops_trailing_comments() {
        assert_eq!(
            format_versions(&entries(&[r#"groovy = "2.5.7" # pinned"#])).unwrap(),
            vec![r#"groovy = "2.5.7""#]
        );
    }

    #[test]
    fn malformed_entry_fails() {
        assert!(matches!(
            format_plugins(&entries(&["a = {"])),
            Err(CatalogError::MalformedEntry { .. })
        ));
    }
}
