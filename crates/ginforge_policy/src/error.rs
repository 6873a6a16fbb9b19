//! Error types for workspace policy.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors that can occur during workspace validation.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("No workspace roots configured: set GOPATH to the directory tree projects are created in")]
    NoWorkspaceConfigured,

    #[error("Path is outside every configured workspace root: {}", .path.display())]
    OutsideWorkspace { path: PathBuf },
}
