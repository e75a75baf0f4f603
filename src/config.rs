//! Configuration management for gatehouse.
//!
//! Settings live in a `gatehouse.toml` at the project root. Every field
//! has a default, so a missing file means default behavior rather than
//! an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GatehouseError, Result};

/// Project-level configuration, loaded from `gatehouse.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub commit: CommitConfig,
    pub catalog: CatalogConfig,
}

/// Commit message gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Gate commit messages on branch prefixes
    pub check: bool,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self { check: true }
    }
}

/// Error-message catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// File name searched for in the project tree
    pub file_name: String,

    /// Dotted namespace used to derive a prefix for fresh catalogs
    /// (e.g. `com.acme.billing`)
    pub namespace: String,

    /// Namespace segment after which the service name starts
    /// (e.g. `acme`)
    pub root_marker: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_name: "error_messages.yml".to_string(),
            namespace: String::new(),
            root_marker: String::new(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration for a project, falling back to defaults when
    /// no `gatehouse.toml` exists.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::config_path(project_dir);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| GatehouseError::config_with_path(e.to_string(), path))
        } else {
            Ok(Self::default())
        }
    }

    /// Get the gatehouse.toml path for a project
    pub fn config_path(project_dir: &Path) -> PathBuf {
        project_dir.join("gatehouse.toml")
    }
}
