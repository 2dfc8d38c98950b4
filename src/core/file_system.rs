//! Locating the workspace file on disk

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// File extension of multi-root workspace files.
pub const WORKSPACE_EXTENSION: &str = "code-workspace";

/// Workspace files directly inside `dir`, sorted by name.
pub fn workspace_files_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut found: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext == WORKSPACE_EXTENSION)
                    .unwrap_or(false)
        })
        .collect();
    found.sort();
    found
}

/// Find the workspace file governing `start`: the single `.code-workspace`
/// file in `start` or in the nearest ancestor directory that has one.
///
/// A directory holding more than one workspace file is ambiguous and an
/// error; the caller has to name the file explicitly.
pub fn locate_workspace_file(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        let mut candidates = workspace_files_in(dir);
        match candidates.len() {
            0 => continue,
            1 => return Ok(candidates.swap_remove(0)),
            _ => bail!(
                "multiple workspace files in {}; pass --workspace to pick one of: {}",
                dir.display(),
                candidates
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }

    bail!(
        "no .{} file found in {} or any parent directory",
        WORKSPACE_EXTENSION,
        start.display()
    )
}
