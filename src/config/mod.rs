//! Linter configuration loading, parsing, and validation.
//!
//! This module handles the `.catalog-lint.yml` file:
//! - Schema definitions and the BOM settings in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use catalog_lint::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".catalog-lint.yml"),
//!     "boms:\n  quarkus:\n    - quarkusArc\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(config.boms.is_dependent("quarkusArc"));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, ConfigPaths, CONFIG_FILE_NAME,
};
pub use schema::{config_json_schema, BomRegistry, LinterConfig, DEFAULT_CATALOG_PATH};
pub use validator::{validate, validate_config, ValidationError};
