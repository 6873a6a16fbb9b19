//! # ginforge_policy
//!
//! Workspace placement policy for ginforge.
//!
//! Generated projects must be created inside a designated workspace — an
//! ordered list of root directories sourced from the `GOPATH` search path.
//! This crate is the policy gate the CLI consults before any directory or
//! file is created. It has no filesystem side effects of its own.

pub mod error;
pub mod workspace;

pub use error::{PolicyError, PolicyResult};
pub use workspace::{Workspace, WORKSPACE_ENV};
