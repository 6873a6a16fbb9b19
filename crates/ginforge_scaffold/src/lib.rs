//! # ginforge_scaffold
//!
//! Template rendering and project materialization for ginforge.
//!
//! This crate is the generator core: a fixed template set, a pure
//! placeholder renderer, a declarative creation plan, and the materializer
//! that turns a base path and a project name into a Gin project skeleton
//! on disk, reporting every step it performed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ginforge_scaffold::create_project;
//!
//! let result = create_project(Path::new("/work"), "shop").unwrap();
//! for path in result.created_paths() {
//!     println!("Create {}", path.display());
//! }
//! assert!(result.success);
//! ```

pub mod error;
pub mod materialize;
pub mod outcome;
pub mod plan;
pub mod render;
pub mod template;

pub use error::{ScaffoldError, ScaffoldResult};
pub use materialize::{create_project, validate_name};
pub use outcome::{CreatedEntry, CreationResult, EntryKind, EntryStatus};
pub use plan::{FileSpec, DIRECTORIES, FILES};
pub use render::{project_vars, Renderer};
