//! Workspace membership checks.
//!
//! Generated projects must live inside a configured workspace. The workspace
//! is an ordered list of root directories taken from the `GOPATH` search
//! path; a candidate path is accepted when it equals or descends from any
//! root. The check is a policy gate evaluated before anything touches the
//! filesystem, so it is deliberately pure: no I/O beyond reading the
//! externally supplied root list.

use std::env;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{PolicyError, PolicyResult};

/// Environment variable holding the workspace search path.
pub const WORKSPACE_ENV: &str = "GOPATH";

/// An ordered set of workspace root directories.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    /// Create a workspace from an explicit list of roots.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the workspace from the `GOPATH` search path.
    ///
    /// An unset or empty variable yields an empty root list, which rejects
    /// every path: the absence of a configured workspace is not the same as
    /// being inside one.
    pub fn from_env() -> Self {
        let roots = match env::var_os(WORKSPACE_ENV) {
            Some(raw) => env::split_paths(&raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        debug!("workspace roots: {:?}", roots);
        Self { roots }
    }

    /// The configured roots, in search-path order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Whether `path` equals or descends from any configured root.
    ///
    /// Both sides are lexically normalized first, so trailing separators and
    /// `.`/`..` segments do not affect the outcome. Comparison is
    /// component-wise: `/work2` is not inside `/work`.
    pub fn is_valid(&self, path: &Path) -> bool {
        let candidate = normalize(path);
        self.roots
            .iter()
            .any(|root| candidate.starts_with(normalize(root)))
    }

    /// Error-typed variant of [`is_valid`](Self::is_valid).
    ///
    /// Distinguishes a missing configuration from a path that falls outside
    /// every root, so callers can report the right remedy.
    pub fn check(&self, path: &Path) -> PolicyResult<()> {
        if self.roots.is_empty() {
            return Err(PolicyError::NoWorkspaceConfigured);
        }
        if !self.is_valid(path) {
            return Err(PolicyError::OutsideWorkspace {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Lexically clean a path: drop `.` segments and resolve `..` against the
/// preceding component where one exists. Purely textual, never consults the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            c => parts.push(c),
        }
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_is_valid() {
        let ws = Workspace::new(["/work"]);
        assert!(ws.is_valid(Path::new("/work/shop")));
        assert!(ws.is_valid(Path::new("/work/deep/nested/dir")));
    }

    #[test]
    fn test_root_itself_is_valid() {
        let ws = Workspace::new(["/work"]);
        assert!(ws.is_valid(Path::new("/work")));
    }

    #[test]
    fn test_outside_is_invalid() {
        let ws = Workspace::new(["/work"]);
        assert!(!ws.is_valid(Path::new("/home/alice")));
        assert!(!ws.is_valid(Path::new("/")));
    }

    #[test]
    fn test_sibling_prefix_is_not_a_descendant() {
        let ws = Workspace::new(["/work"]);
        assert!(!ws.is_valid(Path::new("/work2/shop")));
    }

    #[test]
    fn test_empty_configuration_rejects_everything() {
        let ws = Workspace::new(Vec::<PathBuf>::new());
        assert!(!ws.is_valid(Path::new("/work")));
        assert!(!ws.is_valid(Path::new("/")));
        assert!(matches!(
            ws.check(Path::new("/work")),
            Err(PolicyError::NoWorkspaceConfigured)
        ));
    }

    #[test]
    fn test_trailing_separator_ignored() {
        let ws = Workspace::new(["/work/"]);
        assert!(ws.is_valid(Path::new("/work/shop/")));
    }

    #[test]
    fn test_dot_segments_normalized() {
        let ws = Workspace::new(["/work"]);
        assert!(ws.is_valid(Path::new("/work/./shop")));
        assert!(ws.is_valid(Path::new("/work/tmp/../shop")));
        assert!(!ws.is_valid(Path::new("/work/../elsewhere")));
    }

    #[test]
    fn test_multiple_roots() {
        let ws = Workspace::new(["/work", "/srv/projects"]);
        assert!(ws.is_valid(Path::new("/srv/projects/api")));
        assert!(ws.is_valid(Path::new("/work/api")));
        assert!(!ws.is_valid(Path::new("/srv/other")));
    }

    #[test]
    fn test_check_reports_offending_path() {
        let ws = Workspace::new(["/work"]);
        match ws.check(Path::new("/home/alice")) {
            Err(PolicyError::OutsideWorkspace { path }) => {
                assert_eq!(path, Path::new("/home/alice"));
            }
            other => panic!("expected OutsideWorkspace, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("a/./b")), PathBuf::from("a/b"));
    }
}
