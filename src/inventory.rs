//! Input inventory document
//!
//! The upstream scanner hands the advisor an opaque findings document:
//!
//! ```json
//! {
//!   "workflow_version": "1.0",
//!   "project_root": "/abs/path/to/project",
//!   "findings": { "files": [{ "path": "src/a.ts", "size": 120, "lines": 8, "extension": "ts" }] }
//! }
//! ```
//!
//! Anything malformed here is fatal before analysis starts.

use crate::errors::GrouperError;
use crate::models::FileRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
    pub workflow_version: String,
    pub project_root: String,
    pub findings: Findings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Findings {
    pub files: Vec<FileRecord>,
}

/// Load and validate the inventory document.
pub fn load_inventory(path: &Path) -> Result<Inventory, GrouperError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GrouperError::Input(format!("cannot read {}: {e}", path.display())))?;
    let inventory: Inventory = serde_json::from_str(&content)
        .map_err(|e| GrouperError::Input(format!("cannot parse {}: {e}", path.display())))?;
    validate(&inventory)?;
    Ok(inventory)
}

/// Paths are the unique key for the run; an inventory that repeats one is
/// malformed.
fn validate(inventory: &Inventory) -> Result<(), GrouperError> {
    if inventory.project_root.is_empty() {
        return Err(GrouperError::Input("project_root is empty".to_string()));
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for record in &inventory.findings.files {
        if record.path.is_empty() {
            return Err(GrouperError::Input(
                "inventory contains a file record with an empty path".to_string(),
            ));
        }
        if !seen.insert(record.path.as_str()) {
            return Err(GrouperError::Input(format!(
                "duplicate file path in inventory: {}",
                record.path
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_doc(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("scan.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(
            &dir,
            r#"{"workflow_version":"1.0","project_root":"/p","findings":{"files":[
                {"path":"src/a.ts","size":10,"lines":2,"extension":"ts"}]}}"#,
        );
        let inv = load_inventory(&path).unwrap();
        assert_eq!(inv.findings.files.len(), 1);
        assert_eq!(inv.findings.files[0].path, "src/a.ts");
    }

    #[test]
    fn test_missing_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_inventory(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GrouperError::Input(_)));
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(&dir, "[1, 2");
        assert!(matches!(
            load_inventory(&path),
            Err(GrouperError::Input(_))
        ));
    }

    #[test]
    fn test_duplicate_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(
            &dir,
            r#"{"workflow_version":"1.0","project_root":"/p","findings":{"files":[
                {"path":"a.ts","size":1,"lines":1,"extension":"ts"},
                {"path":"a.ts","size":1,"lines":1,"extension":"ts"}]}}"#,
        );
        assert!(matches!(
            load_inventory(&path),
            Err(GrouperError::Input(_))
        ));
    }
}
