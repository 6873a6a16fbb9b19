//! Project materialization.
//!
//! Creates the directory tree and writes the rendered files for a new
//! project, strictly sequentially and in plan order. Creation is
//! best-effort: the first filesystem failure aborts the remaining steps and
//! whatever was already created stays on disk. A caller that needs
//! atomicity should create into a temporary sibling and rename on success.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::outcome::{CreationResult, EntryKind};
use crate::plan::{DIRECTORIES, FILES};
use crate::render::{project_vars, Renderer};

/// Validate a project name before anything touches the filesystem.
///
/// The name doubles as the project directory name and the generated import
/// path, so it must not be empty and must not escape the target tree.
pub fn validate_name(name: &str) -> ScaffoldResult<()> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Materialize a new project named `name` under `base`.
///
/// Returns `Err` only when the request is rejected before any mutation
/// (empty or unsafe name). Once creation has started, failures are reported
/// through the returned [`CreationResult`]: the failing step is recorded
/// with [`EntryStatus::Failed`](crate::outcome::EntryStatus::Failed), no
/// further steps run, and `success` is false.
pub fn create_project(base: &Path, name: &str) -> ScaffoldResult<CreationResult> {
    validate_name(name)?;

    let project_root = base.join(name);
    let mut result = CreationResult::new();

    info!("creating project {} at {}", name, project_root.display());

    let mut directories: Vec<PathBuf> = Vec::with_capacity(DIRECTORIES.len() + 1);
    directories.push(project_root.clone());
    directories.extend(DIRECTORIES.iter().map(|d| project_root.join(d)));

    // A failed directory aborts everything downstream, file writes included.
    for dir in directories {
        match ensure_directory(&dir) {
            Ok(()) => {
                debug!("created directory {}", dir.display());
                result.record_created(dir, EntryKind::Directory);
            }
            Err(err) => {
                result.record_failed(dir, EntryKind::Directory, &err);
                return Ok(result);
            }
        }
    }

    let renderer = Renderer::new();
    let vars = project_vars(name);

    for spec in &FILES {
        let target = project_root.join(spec.rel_path);
        let content = renderer.render(spec.template, &vars);
        match write_file(&target, &content) {
            Ok(()) => {
                debug!("rendered {} template to {}", spec.role, target.display());
                result.record_created(target, EntryKind::File);
            }
            Err(err) => {
                result.record_failed(target, EntryKind::File, &err);
                return Ok(result);
            }
        }
    }

    info!("project {} created", name);
    Ok(result)
}

/// Create a directory if absent. A pre-existing directory is fine; a
/// pre-existing entry of any other type is a conflict.
fn ensure_directory(path: &Path) -> ScaffoldResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScaffoldError::Conflict {
            path: path.to_path_buf(),
            expected: "directory",
        }),
        Err(_) => fs::create_dir_all(path).map_err(|source| ScaffoldError::Io {
            op: "create directory",
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write rendered content. Overwriting a regular file is fresh-creation
/// semantics and allowed; a directory at the destination is a conflict,
/// never a silent success.
fn write_file(path: &Path, content: &str) -> ScaffoldResult<()> {
    if let Ok(meta) = fs::metadata(path) {
        if meta.is_dir() {
            return Err(ScaffoldError::Conflict {
                path: path.to_path_buf(),
                expected: "regular file",
            });
        }
    }
    fs::write(path, content).map_err(|source| ScaffoldError::Io {
        op: "write file",
        path: path.to_path_buf(),
        source,
    })
}
