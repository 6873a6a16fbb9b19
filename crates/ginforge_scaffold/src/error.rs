//! Error types for scaffolding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while materializing a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Project name must not be empty")]
    EmptyName,

    #[error("Invalid project name {name:?}: path separators and `..` segments are not allowed")]
    InvalidName { name: String },

    #[error("Conflicting entry already exists at {}: expected a {expected}", .path.display())]
    Conflict {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
