//! catalog-lint - Linter and formatter for Gradle version catalogs.
//!
//! catalog-lint checks a `libs.versions.toml` file against a fixed set of
//! layout and ordering rules, and rewrites it into the canonical form those
//! rules describe.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog model, section reader, and entry notation parser
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`format`] - Canonical catalog formatter
//! - [`lint`] - Lint rules, BOM checks, and diagnostic output
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::segment;
//! use catalog_lint::lint::CatalogLinter;
//!
//! let catalog = segment("[versions]\nkotlin = \"2.0.0\"\naxis = \"1.3\"\n");
//! let diagnostics = CatalogLinter::default().lint(&catalog).unwrap();
//!
//! assert_eq!(diagnostics.len(), 2);
//! assert_eq!(
//!     diagnostics[0].to_string(),
//!     "Line 2: Entries are not sorted alphabetically in section '[versions]'. Found alias 'kotlin' where 'axis' was expected."
//! );
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod lint;
pub mod ui;

pub use error::{CatalogError, Result};
