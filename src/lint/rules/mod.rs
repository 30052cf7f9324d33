//! Built-in lint rules.
//!
//! This module contains all the validation rules that come with
//! catalog-lint. Shared rules apply to every section; the rest are scoped to
//! the section whose notation they check.

pub mod alphabetical_order;
pub mod bundle_layout;
pub mod library_attributes;
pub mod plugin_attributes;
pub mod rich_version;
pub mod whitespace;

pub use alphabetical_order::AlphabeticalOrderRule;
pub use bundle_layout::{BundleIndentationRule, BundleOrderRule};
pub use library_attributes::{LibraryAttributesRule, LibraryBomCoverageRule};
pub use plugin_attributes::PluginAttributesRule;
pub use rich_version::RichVersionOrderRule;
pub use whitespace::{AdjacentWhitespaceRule, LeadingWhitespaceRule, TrailingWhitespaceRule};
