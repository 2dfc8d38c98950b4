//! Workspace document model and persistence
//!
//! A workspace document is the JSON(-with-comments) file describing a
//! multi-root editor workspace: an ordered `folders` array plus a `settings`
//! map. Loading tolerates comments and trailing commas; saving writes strict
//! pretty-printed JSON, so formatting does not round-trip but data does.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::WorkspaceError;
use super::jsonc;

/// Settings key holding the hidden folder list.
pub const HIDDEN_FOLDERS_KEY: &str = "Workhide.hidden_folders";

/// One workspace root: a path plus an optional display label.
///
/// Identity is by path; the label is carried only when the entry already
/// has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A multi-root workspace configuration file, loaded into memory.
///
/// The document lives for a single command: load, mutate, save. Top-level
/// keys other than `folders` and `settings` (`launch`, `tasks`, ...) are
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    /// File the document was loaded from. Not part of the JSON payload.
    #[serde(skip)]
    pub path: PathBuf,
    /// Active workspace folders, in display order.
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
    /// Workspace settings. Missing in the file reads as empty.
    #[serde(default)]
    pub settings: Map<String, Value>,
    /// Remaining top-level keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkspaceDocument {
    /// Load a workspace document from disk.
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        if !path.is_file() {
            return Err(WorkspaceError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| WorkspaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut document: Self = serde_json::from_str(&jsonc::to_strict_json(&content))
            .map_err(|source| WorkspaceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        document.path = absolute(path);
        Ok(document)
    }

    /// Save the document back to the file it was loaded from, as strict
    /// indented JSON.
    pub fn save(&self) -> Result<(), WorkspaceError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| WorkspaceError::Write {
                path: self.path.clone(),
                source: source.into(),
            })?;
        fs::write(&self.path, content).map_err(|source| WorkspaceError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Saved workspace: {}", self.path.display());
        Ok(())
    }

    /// Directory the workspace file lives in. Relative folder paths resolve
    /// against it.
    pub fn root_dir(&self) -> PathBuf {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Folders currently hidden, read from the settings map.
    ///
    /// A missing key reads as an empty list; a key holding anything other
    /// than a folder array is a parse error.
    pub fn hidden_folders(&self) -> Result<Vec<FolderEntry>, WorkspaceError> {
        match self.settings.get(HIDDEN_FOLDERS_KEY) {
            None => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|source| WorkspaceError::Parse {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// Replace the hidden folder list in the settings map.
    pub fn set_hidden_folders(&mut self, hidden: Vec<FolderEntry>) {
        let value = serde_json::to_value(hidden).unwrap_or_else(|_| Value::Array(Vec::new()));
        self.settings.insert(HIDDEN_FOLDERS_KEY.to_string(), value);
    }
}

/// Absolute form of `path`, resolved against the current directory when
/// relative.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_workspace(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("test.code-workspace");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = WorkspaceDocument::load(&tmp.path().join("absent.code-workspace")).unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(tmp.path(), "{ this is not json");
        let err = WorkspaceDocument::load(&path).unwrap_err();
        assert!(matches!(err, WorkspaceError::Parse { .. }));
    }

    #[test]
    fn test_load_tolerates_jsonc() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(
            tmp.path(),
            r#"{
                // active roots
                "folders": [
                    {"path": "/a", "name": "A"},
                    {"path": "/b"}, /* keep */
                ],
                "settings": {
                    "editor.tabSize": 2,
                },
            }"#,
        );

        let doc = WorkspaceDocument::load(&path).unwrap();
        assert_eq!(doc.folders.len(), 2);
        assert_eq!(doc.folders[0].name.as_deref(), Some("A"));
        assert_eq!(doc.settings["editor.tabSize"], 2);
    }

    #[test]
    fn test_missing_sections_read_as_empty() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(tmp.path(), "{}");

        let doc = WorkspaceDocument::load(&path).unwrap();
        assert!(doc.folders.is_empty());
        assert!(doc.settings.is_empty());
    }

    #[test]
    fn test_save_writes_strict_json_and_keeps_extra_keys() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(
            tmp.path(),
            r#"{
                "folders": [{"path": "/a"}], // roots
                "launch": {"configurations": []},
            }"#,
        );

        let doc = WorkspaceDocument::load(&path).unwrap();
        doc.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("// roots"));
        // Strict JSON: parseable without the tolerant preprocessing.
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["folders"][0]["path"], "/a");
        assert!(value["launch"]["configurations"].is_array());

        let reloaded = WorkspaceDocument::load(&path).unwrap();
        assert_eq!(reloaded.folders, doc.folders);
        assert!(reloaded.extra.contains_key("launch"));
    }

    #[test]
    fn test_save_omits_absent_names() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(tmp.path(), r#"{"folders": [{"path": "/a"}]}"#);

        let doc = WorkspaceDocument::load(&path).unwrap();
        doc.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("\"name\""));
    }

    #[test]
    fn test_hidden_folders_accessors() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(tmp.path(), "{}");
        let mut doc = WorkspaceDocument::load(&path).unwrap();

        assert!(doc.hidden_folders().unwrap().is_empty());

        doc.set_hidden_folders(vec![FolderEntry {
            path: PathBuf::from("/b"),
            name: None,
        }]);
        let hidden = doc.hidden_folders().unwrap();
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].path, PathBuf::from("/b"));
        assert!(doc.settings.contains_key(HIDDEN_FOLDERS_KEY));
    }

    #[test]
    fn test_malformed_hidden_list_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_workspace(
            tmp.path(),
            &format!(r#"{{"settings": {{"{HIDDEN_FOLDERS_KEY}": 42}}}}"#),
        );

        let doc = WorkspaceDocument::load(&path).unwrap();
        let err = doc.hidden_folders().unwrap_err();
        assert!(matches!(err, WorkspaceError::Parse { .. }));
    }
}
