//! Error kinds for workspace document operations

use std::path::PathBuf;

/// Errors surfaced by loading, mutating, and saving a workspace document.
///
/// Target mismatches (hiding a path that is not an active folder, showing a
/// path that is not hidden) are deliberately not errors; the operations
/// report them as no-ops instead.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("workspace file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not read workspace file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse workspace file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot hide the last folder")]
    LastFolder,
    #[error("no hidden folders to show")]
    NothingHidden,
    #[error("could not write workspace file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
