//! Error types for hierarchy parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a hierarchy dump.
///
/// Malformed attribute values are not errors; they fall back to defaults
/// while building a [`crate::Node`].
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// The dump file does not exist
    #[error("Hierarchy dump not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The dump text is not well-formed XML
    #[error("Malformed hierarchy dump: {0}")]
    Malformed(String),

    /// Reading the dump file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HierarchyError {
    /// Create a NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a Malformed error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Stable tag for the error kind, used in tool responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Malformed(_) => "malformed",
            Self::Io(_) => "io",
        }
    }
}
