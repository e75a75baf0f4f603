//! Custom error types for gatehouse.
//!
//! The pure checks in [`crate::branch`] and [`crate::catalog`] are total
//! and never produce errors; everything here belongs to the host side of
//! the tool (files, git, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used by the CLI when a commit message needs explicit user
/// confirmation. Not an error: see [`crate::branch::Verdict`].
pub const NEEDS_CONFIRMATION_EXIT: i32 = 2;

/// Main error type for gatehouse operations
#[derive(Error, Debug)]
pub enum GatehouseError {
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// No catalog file found in the project tree
    #[error("No catalog file named '{name}' found under {}", root.display())]
    CatalogNotFound { name: String, root: PathBuf },

    /// Entry key already present in the catalog
    #[error("Entry '{key}' already exists in the catalog")]
    DuplicateKey { key: String },

    /// Git operation failed
    #[error("Git operation failed: {operation} - {message}")]
    Git { operation: String, message: String },

    /// Missing required tool
    #[error("Missing required tool: {tool}")]
    MissingTool { tool: String },

    /// Hook installation failed
    #[error("Hook installation failed: {message}")]
    Hook { message: String },

    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatehouseError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create a git error
    pub fn git(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Git {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a hook error
    pub fn hook(message: impl Into<String>) -> Self {
        Self::Hook {
            message: message.into(),
        }
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DuplicateKey { .. } => 3,
            Self::Git { .. } | Self::MissingTool { .. } => 4,
            Self::CatalogNotFound { .. } => 5,
            Self::Config { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for gatehouse results
pub type Result<T> = std::result::Result<T, GatehouseError>;
