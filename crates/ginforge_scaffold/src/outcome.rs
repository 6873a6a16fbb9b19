//! Creation outcome reporting.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry an operation produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

/// Outcome of one creation step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Created,
    Failed,
}

/// One directory or file operation, in the order it was performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub status: EntryStatus,
}

/// The full record of a materialization run.
///
/// Built incrementally while the project is created and handed back to the
/// caller for display. On failure the last entry is the step that failed
/// and `failure` carries the diagnostic; entries before it remain on disk
/// (creation is best-effort, not transactional).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationResult {
    pub entries: Vec<CreatedEntry>,
    pub success: bool,
    pub failure: Option<String>,
}

impl Default for CreationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationResult {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            success: true,
            failure: None,
        }
    }

    /// Record a successful step.
    pub fn record_created(&mut self, path: PathBuf, kind: EntryKind) {
        self.entries.push(CreatedEntry {
            path,
            kind,
            status: EntryStatus::Created,
        });
    }

    /// Record the failing step and mark the run failed.
    pub fn record_failed(&mut self, path: PathBuf, kind: EntryKind, error: impl Display) {
        self.entries.push(CreatedEntry {
            path,
            kind,
            status: EntryStatus::Failed,
        });
        self.success = false;
        self.failure = Some(error.to_string());
    }

    /// Paths of everything actually created, in creation order.
    pub fn created_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Created)
            .map(|e| e.path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_accumulates_in_order() {
        let mut result = CreationResult::new();
        result.record_created(PathBuf::from("/work/shop"), EntryKind::Directory);
        result.record_created(PathBuf::from("/work/shop/main.go"), EntryKind::File);
        assert!(result.success);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(
            result.created_paths().collect::<Vec<_>>(),
            vec![Path::new("/work/shop"), Path::new("/work/shop/main.go")]
        );
    }

    #[test]
    fn test_failure_marks_run_and_keeps_diagnostic() {
        let mut result = CreationResult::new();
        result.record_created(PathBuf::from("/work/shop"), EntryKind::Directory);
        result.record_failed(
            PathBuf::from("/work/shop/conf"),
            EntryKind::Directory,
            "conflicting entry",
        );
        assert!(!result.success);
        assert_eq!(result.failure.as_deref(), Some("conflicting entry"));
        assert_eq!(result.entries.last().unwrap().status, EntryStatus::Failed);
        assert_eq!(result.created_paths().count(), 1);
    }
}
