//! Catalog validation and linting.
//!
//! This module validates version catalogs through a pluggable rule-based
//! system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Line-located problem reports ([`LintDiagnostic`])
//! - **Linter** - Runs the rules over a whole catalog ([`CatalogLinter`])
//!
//! # Example
//!
//! ```
//! use catalog_lint::catalog::segment;
//! use catalog_lint::lint::CatalogLinter;
//!
//! let catalog = segment("[versions]\ncache2k = \"2.0.0.Final\"\nbyteBuddy = \"1.12.9\"\n");
//! let diagnostics = CatalogLinter::default().lint(&catalog).unwrap();
//!
//! assert_eq!(diagnostics.len(), 2);
//! assert!(diagnostics[0].to_string().starts_with("Line 2: "));
//! ```

pub mod bom;
pub mod diagnostic;
pub mod linter;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;

pub use bom::check_bom_declarations;
pub use diagnostic::LintDiagnostic;
pub use linter::CatalogLinter;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintContext, LintRule, ParsedEntry, RuleId};
pub use rules::{
    AdjacentWhitespaceRule, AlphabeticalOrderRule, BundleIndentationRule, BundleOrderRule,
    LeadingWhitespaceRule, LibraryAttributesRule, LibraryBomCoverageRule, PluginAttributesRule,
    RichVersionOrderRule, TrailingWhitespaceRule,
};
