//! Configuration file discovery and loading.
//!
//! The linter reads at most one configuration file: the one named with
//! `--config`, or `.catalog-lint.yml` in the project root. A missing
//! project file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::LinterConfig;
use crate::config::validator::validate;
use crate::error::{CatalogError, Result};

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = ".catalog-lint.yml";

/// Location of the configuration for a project.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .catalog-lint.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: Self::find_project_config(project_root),
        }
    }

    /// Find project config at .catalog-lint.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.catalog-lint.yml` (primary indicator)
/// 2. `settings.gradle(.kts)` (fallback)
/// 3. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join("settings.gradle.kts").exists() || current.join("settings.gradle").exists()
        {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`LinterConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the values are invalid.
pub fn load_config_file(path: &Path) -> Result<LinterConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    debug!(path = %path.display(), boms = config.boms.len(), "loaded config");
    Ok(config)
}

/// Parse YAML content into [`LinterConfig`].
///
/// An empty document yields the default configuration.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LinterConfig> {
    if content.trim().is_empty() {
        return Ok(LinterConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CatalogError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project's `.catalog-lint.yml` is used when present, and defaults when
/// not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LinterConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match ConfigPaths::discover(project_root).project {
        Some(path) => load_config_file(&path),
        None => {
            debug!(root = %project_root.display(), "no config file, using defaults");
            Ok(LinterConfig::default())
        }
    }
}
