//! Version catalog model, reader, and notation parser.
//!
//! A catalog document is split into four sections. The [`reader`] turns raw
//! text into line-addressed [`Entry`] values grouped per [`Section`], and
//! [`notation`] interprets a single entry's text as an alias plus a value.
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::{segment, Section};
//!
//! let catalog = segment("[versions]\nkotlin = \"2.0.0\"\n");
//! assert_eq!(catalog.section(Section::Versions).len(), 1);
//! assert!(catalog.section(Section::Plugins).is_empty());
//! ```

pub mod notation;
pub mod reader;
pub mod span;

use std::fmt;

use crate::error::{CatalogError, Result};

pub use notation::{parse_entry, Declaration, InlineTable, NotationError, Value};
pub use reader::{read_catalog_file, read_catalog_text, segment};
pub use span::LineSpan;

/// One of the four catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Versions,
    Libraries,
    Bundles,
    Plugins,
}

impl Section {
    /// All sections in declaration order.
    pub const ALL: [Section; 4] = [
        Section::Versions,
        Section::Libraries,
        Section::Bundles,
        Section::Plugins,
    ];

    /// The header line that opens this section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Versions => "[versions]",
            Section::Libraries => "[libraries]",
            Section::Bundles => "[bundles]",
            Section::Plugins => "[plugins]",
        }
    }

    /// Find the section whose header matches `line` (already trimmed).
    pub fn from_header(line: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.label() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logical declaration inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lines the entry occupies in the source.
    pub span: LineSpan,
    /// Raw text, untrimmed; multi-line entries are joined with `\n`.
    pub content: String,
}

impl Entry {
    /// Create an entry spanning a single line.
    pub fn new(line: usize, content: impl Into<String>) -> Self {
        Self {
            span: LineSpan::line(line),
            content: content.into(),
        }
    }

    /// Create an entry spanning an explicit range of lines.
    pub fn spanning(span: LineSpan, content: impl Into<String>) -> Self {
        Self {
            span,
            content: content.into(),
        }
    }

    /// Parse the entry's notation into its alias and value.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry`, located at this entry's span, if the
    /// notation can't be parsed.
    pub fn declaration(&self) -> Result<Declaration> {
        parse_entry(&self.content).map_err(|e| CatalogError::MalformedEntry {
            span: self.span,
            message: e.to_string(),
        })
    }
}

/// The entries of all four sections, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub versions: Vec<Entry>,
    pub libraries: Vec<Entry>,
    pub bundles: Vec<Entry>,
    pub plugins: Vec<Entry>,
}

impl Catalog {
    /// Entries of one section.
    pub fn section(&self, section: Section) -> &[Entry] {
        match section {
            Section::Versions => &self.versions,
            Section::Libraries => &self.libraries,
            Section::Bundles => &self.bundles,
            Section::Plugins => &self.plugins,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut Vec<Entry> {
        match section {
            Section::Versions => &mut self.versions,
            Section::Libraries => &mut self.libraries,
            Section::Bundles => &mut self.bundles,
            Section::Plugins => &mut self.plugins,
        }
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    /// Whether no section has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_labels() {
        assert_eq!(Section::Versions.label(), "[versions]");
        assert_eq!(Section::Libraries.label(), "[libraries]");
        assert_eq!(Section::Bundles.label(), "[bundles]");
        assert_eq!(Section::Plugins.label(), "[plugins]");
    }

    #[test]
    fn section_from_header() {
        assert_eq!(Section::from_header("[bundles]"), Some(Section::Bundles));
        assert_eq!(Section::from_header("[metadata]"), None);
        assert_eq!(Section::from_header("bundles"), None);
    }

    #[test]
    fn catalog_len_counts_all_sections() {
        let catalog = Catalog {
            versions: vec![Entry::new(2, "a = \"1\"")],
            plugins: vec![Entry::new(5, "p = { id = \"x\" }")],
            ..Default::default()
        };

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn entry_declaration_is_located_on_failure() {
        let entry = Entry::spanning(LineSpan::new(3, 5), "groovy = [\n    \"a\",\n");

        match entry.declaration() {
            Err(CatalogError::MalformedEntry { span, .. }) => assert_eq!(span, LineSpan::new(3, 5)),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
