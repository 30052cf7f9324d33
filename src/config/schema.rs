//! Configuration schema definitions for catalog-lint.
//!
//! This module contains the struct definitions that map to the
//! `.catalog-lint.yml` file format.

use std::collections::BTreeMap;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Catalog location used when neither the CLI nor the config names one.
pub const DEFAULT_CATALOG_PATH: &str = "gradle/libs.versions.toml";

/// Root configuration structure for `.catalog-lint.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LinterConfig {
    /// Path of the version catalog, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// BOM libraries and the library aliases whose versions they manage.
    #[serde(skip_serializing_if = "BomRegistry::is_empty")]
    pub boms: BomRegistry,
}

impl LinterConfig {
    /// The configured catalog path, or the default location.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

/// Mapping from BOM library alias to the aliases of its dependents.
///
/// A library listed as a dependent may omit its version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BomRegistry(BTreeMap<String, Vec<String>>);

impl BomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `bom` with the given dependents, replacing any earlier entry.
    pub fn insert<I, S>(&mut self, bom: impl Into<String>, dependents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(bom.into(), dependents.into_iter().map(Into::into).collect());
    }

    /// BOM aliases, sorted.
    pub fn boms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every dependent alias of every BOM.
    pub fn dependents(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    /// Dependents of one BOM.
    pub fn dependents_of(&self, bom: &str) -> Option<&[String]> {
        self.0.get(bom).map(Vec::as_slice)
    }

    /// Whether `alias` is configured as a BOM.
    pub fn is_bom(&self, alias: &str) -> bool {
        self.0.contains_key(alias)
    }

    /// Whether some BOM lists `alias` as a dependent.
    pub fn is_dependent(&self, alias: &str) -> bool {
        self.dependents().any(|d| d == alias)
    }

    /// Number of BOMs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no BOM is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for BomRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (bom, dependents) in iter {
            registry.insert(bom, dependents);
        }
        registry
    }
}

/// JSON Schema of the configuration file.
pub fn config_json_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(LinterConfig)).unwrap_or_default()
}
