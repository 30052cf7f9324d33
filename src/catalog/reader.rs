//! Section reader.
//!
//! Scans a catalog document line by line and files every declaration under
//! the section it belongs to. Reading never fails: lines outside the four
//! known sections are ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::{Catalog, Entry, Section};
use crate::error::{CatalogError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read and segment a catalog file.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
pub fn read_catalog_file(path: &Path) -> Result<Catalog> {
    Ok(segment(&read_catalog_text(path)?))
}

/// Read a catalog file's raw text.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
pub fn read_catalog_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })
}

/// Split catalog text into section-tagged entries.
///
/// Multi-line bundle arrays are folded into a single entry: inside
/// `[bundles]`, a line without an opening `[` continues the previous entry.
/// Blank lines and comment lines are skipped and never break such a fold.
pub fn segment(text: &str) -> Catalog {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut catalog = Catalog::default();
    let mut current: Option<Section> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if let Some(section) = Section::from_header(trimmed) {
            trace!(line = line_number, %section, "entering section");
            current = Some(section);
            continue;
        }

        if is_other_table_header(trimmed) {
            trace!(line = line_number, header = trimmed, "leaving known sections");
            current = None;
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let entries = catalog.section_mut(section);
        match entries.last_mut() {
            Some(open) if section == Section::Bundles && !line.contains('[') => {
                open.content.push('\n');
                open.content.push_str(line);
                open.span.extend_to(line_number);
            }
            _ => entries.push(Entry::new(line_number, line)),
        }
    }

    debug!(
        versions = catalog.versions.len(),
        libraries = catalog.libraries.len(),
        bundles = catalog.bundles.len(),
        plugins = catalog.plugins.len(),
        "segmented catalog"
    );

    catalog
}

/// A `[table]` or `[[array]]` header other than the four catalog sections.
fn is_other_table_header(trimmed: &str) -> bool {
    trimmed.starts_with('[') && trimmed.ends_with(']') && !trimmed.contains('=')
}
