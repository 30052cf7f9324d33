//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and iterating over them.

use std::collections::HashMap;

use super::rule::{LintRule, RuleId};
use super::rules::{
    AdjacentWhitespaceRule, AlphabeticalOrderRule, BundleIndentationRule, BundleOrderRule,
    LeadingWhitespaceRule, LibraryAttributesRule, LibraryBomCoverageRule, PluginAttributesRule,
    RichVersionOrderRule, TrailingWhitespaceRule,
};
use crate::catalog::Section;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LeadingWhitespaceRule));
        registry.register(Box::new(TrailingWhitespaceRule));
        registry.register(Box::new(AdjacentWhitespaceRule));
        registry.register(Box::new(AlphabeticalOrderRule));
        registry.register(Box::new(RichVersionOrderRule));
        registry.register(Box::new(LibraryAttributesRule));
        registry.register(Box::new(LibraryBomCoverageRule));
        registry.register(Box::new(BundleOrderRule));
        registry.register(Box::new(BundleIndentationRule));
        registry.register(Box::new(PluginAttributesRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Iterate over the rules that check `section`.
    pub fn for_section(&self, section: Section) -> impl Iterator<Item = &dyn LintRule> {
        self.iter().filter(move |r| r.applies_to(section))
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
