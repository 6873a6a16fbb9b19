//! The creation plan.
//!
//! What gets generated is data, not control flow: a fixed list of
//! subdirectories and a fixed, ordered list of files, each tied to one
//! template. The materializer iterates these generically.

use crate::template;

/// Subdirectories created under the project root, in display order.
/// Creation is idempotent per entry, so the order only affects reporting.
pub const DIRECTORIES: [&str; 8] = [
    "conf",
    "logs",
    "controller",
    "model",
    "routers",
    "tests",
    "static",
    "service",
];

/// One generated file: where it goes and which template produces it.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    /// Logical role, used for logging.
    pub role: &'static str,
    /// Path relative to the project root.
    pub rel_path: &'static str,
    /// Template rendered into the file.
    pub template: &'static str,
}

/// Generated files, in creation order.
pub const FILES: [FileSpec; 7] = [
    FileSpec {
        role: "config",
        rel_path: "conf/app.ini",
        template: template::APP_CONF,
    },
    FileSpec {
        role: "controller",
        rel_path: "controller/default.go",
        template: template::CONTROLLER,
    },
    FileSpec {
        role: "model",
        rel_path: "model/res.go",
        template: template::MODEL,
    },
    FileSpec {
        role: "service",
        rel_path: "service/service.go",
        template: template::SERVICE,
    },
    FileSpec {
        role: "router",
        rel_path: "routers/router.go",
        template: template::ROUTER,
    },
    FileSpec {
        role: "bootstrap",
        rel_path: "config.go",
        template: template::BOOTSTRAP,
    },
    FileSpec {
        role: "entrypoint",
        rel_path: "main.go",
        template: template::ENTRYPOINT,
    },
];
