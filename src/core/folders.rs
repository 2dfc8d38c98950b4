//! Hide and show transitions over the workspace folder list
//!
//! Hiding moves a folder entry from the active `folders` array to the hidden
//! list kept in the settings map; showing moves it back. Both operations
//! mutate the in-memory document only; the caller decides when to save.

use std::path::{Component, Path, PathBuf};

use super::document::{FolderEntry, WorkspaceDocument};
use super::error::WorkspaceError;

/// Outcome of a hide operation.
#[derive(Debug, Clone, PartialEq)]
pub enum HideOutcome {
    /// The entry moved to the hidden list.
    Hidden(FolderEntry),
    /// The target is a directory but not an active workspace folder. The
    /// folder paths were still rewritten in normalized form.
    NoMatch,
    /// The target is not an existing directory; the document is untouched.
    NotADirectory,
}

/// Resolve `.` and `..` components without requiring the path to exist.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // pop() keeps the root, so `..` directly above it is dropped
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Absolute, normalized form of `path`, resolved against `root` when
/// relative.
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&root.join(path))
    }
}

/// Hide `target`: move its entry from the active folder list to the hidden
/// list.
///
/// Every folder entry is rewritten in absolute normalized form (resolved
/// against the workspace root), so the saved document uses uniform paths.
///
/// Fails with [`WorkspaceError::LastFolder`] when the document has fewer
/// than two folders, before anything else is checked; a workspace cannot
/// end up folder-less.
pub fn hide_folder(
    doc: &mut WorkspaceDocument,
    target: &Path,
) -> Result<HideOutcome, WorkspaceError> {
    if doc.folders.len() < 2 {
        return Err(WorkspaceError::LastFolder);
    }

    let root = doc.root_dir();
    let target = resolve(&root, target);
    if !target.is_dir() {
        return Ok(HideOutcome::NotADirectory);
    }

    let mut hidden = doc.hidden_folders()?;
    let mut kept = Vec::with_capacity(doc.folders.len());
    let mut moved = None;

    for folder in std::mem::take(&mut doc.folders) {
        let entry = FolderEntry {
            path: resolve(&root, &folder.path),
            name: folder.name,
        };
        if entry.path == target {
            if moved.is_none() {
                moved = Some(entry.clone());
            }
            hidden.push(entry);
        } else {
            kept.push(entry);
        }
    }

    doc.folders = kept;
    doc.set_hidden_folders(hidden);

    Ok(match moved {
        Some(entry) => HideOutcome::Hidden(entry),
        None => HideOutcome::NoMatch,
    })
}

/// Show `target`: move its entry from the hidden list back into the active
/// folder list.
///
/// The restored entry is appended at the end of `folders` rather than
/// reinserted at its old position; the remaining hidden entries keep their
/// relative order. Returns `None` when no hidden entry matches `target`
/// (a stale selection is not an error).
///
/// Fails with [`WorkspaceError::NothingHidden`] when the hidden list is
/// empty.
pub fn show_folder(
    doc: &mut WorkspaceDocument,
    target: &Path,
) -> Result<Option<FolderEntry>, WorkspaceError> {
    let hidden = doc.hidden_folders()?;
    if hidden.is_empty() {
        return Err(WorkspaceError::NothingHidden);
    }

    let root = doc.root_dir();
    let target = resolve(&root, target);
    let mut remaining = Vec::with_capacity(hidden.len());
    let mut restored = None;

    for entry in hidden {
        if resolve(&root, &entry.path) != target {
            remaining.push(entry);
            continue;
        }
        if restored.is_none() {
            let already_active = doc
                .folders
                .iter()
                .any(|folder| resolve(&root, &folder.path) == target);
            if !already_active {
                doc.folders.push(entry.clone());
            }
            restored = Some(entry);
        }
    }

    doc.set_hidden_folders(remaining);
    Ok(restored)
}
