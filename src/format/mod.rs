//! Canonical catalog formatter.
//!
//! Formatting rewrites every entry into canonical notation, sorts each
//! section, and reassembles the document in fixed section order. It never
//! reports rule violations: whatever the linter would flag about order or
//! layout, the formatter fixes. Formatting canonical output again yields the
//! same text.
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::segment;
//! use catalog_lint::format::format_catalog;
//!
//! let catalog = segment("[plugins]\nktlint = { version = \"12.0.2\", id = \"org.jlleitschuh.gradle.ktlint\" }\n\n[versions]\nkotlin =  \"2.0.0\"\n");
//! let formatted = format_catalog(&catalog).unwrap();
//!
//! assert_eq!(
//!     formatted,
//!     "[versions]\nkotlin = \"2.0.0\"\n\n[plugins]\nktlint = { id = \"org.jlleitschuh.gradle.ktlint\", version = \"12.0.2\" }\n"
//! );
//! ```

pub mod sections;

use tracing::debug;

use crate::catalog::{Catalog, Section};
use crate::error::Result;

pub use sections::{format_bundles, format_libraries, format_plugins, format_versions};

/// Indentation of bundle elements.
pub const INDENT: &str = "    ";

/// Format a whole catalog into canonical text.
///
/// # Errors
///
/// Returns `MalformedEntry` or `UnexpectedValue` if an entry can't be
/// interpreted.
pub fn format_catalog(catalog: &Catalog) -> Result<String> {
    let versions = format_versions(&catalog.versions)?;
    let libraries = format_libraries(&catalog.libraries)?;
    let bundles = format_bundles(&catalog.bundles)?;
    let plugins = format_plugins(&catalog.plugins)?;

    let text = join_sections(&versions, &libraries, &bundles, &plugins);
    debug!(entries = catalog.len(), bytes = text.len(), "formatted catalog");
    Ok(text)
}

/// Assemble rendered sections into a document.
///
/// Sections appear in fixed order, each as its header followed by one entry
/// per line. Empty sections are left out, non-empty ones are separated by a
/// blank line, and the text ends with a single newline.
pub fn join_sections(
    versions: &[String],
    libraries: &[String],
    bundles: &[String],
    plugins: &[String],
) -> String {
    let blocks: Vec<String> = Section::ALL
        .into_iter()
        .zip([versions, libraries, bundles, plugins])
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(section, entries)| format!("{}\n{}", section.label(), entries.join("\n")))
        .collect();

    if blocks.is_empty() {
        return "\n".to_string();
    }
    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}
