use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::state::workspace::Workspace;

const WORKSPACE_FILE: &str = "workspace.toml";

pub fn workspaces_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("reqtree").join("workspaces")
}

/// `<data_dir>/reqtree/workspaces/<name>/workspace.toml`
pub fn workspace_path(name: &str) -> PathBuf {
    workspaces_dir().join(name).join(WORKSPACE_FILE)
}

/// Read a workspace file. `.json` exports go through serde_json, anything
/// else is treated as TOML.
pub fn load_from_path(path: &Path) -> Result<Workspace> {
    let content = std::fs::read_to_string(path)?;
    let workspace: Workspace = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") | None => toml::from_str(&content)?,
        Some(_) => return Err(AppError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(workspace)
}

/// Load a workspace. Only a missing file falls back to an empty workspace
/// named after its directory; a file that exists but fails to load is an
/// error, so it never gets overwritten by an empty save.
pub fn load_or_empty(path: &Path) -> Result<Workspace> {
    match load_from_path(path) {
        Ok(ws) => {
            tracing::info!(
                path = %path.display(),
                requests = ws.requests.len(),
                groups = ws.request_groups.len(),
                "loaded workspace"
            );
            Ok(ws)
        }
        Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no workspace file, starting empty");
            Ok(Workspace::empty(default_name(path)))
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load workspace");
            Err(e)
        }
    }
}

/// Persist the workspace as pretty TOML (JSON for `.json` paths), creating
/// the directory if needed.
pub fn save_to_path(path: &Path, ws: &Workspace) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::to_string_pretty(ws)?,
        _ => toml::to_string_pretty(ws)?,
    };
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved workspace");
    Ok(())
}

fn default_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("default")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::request::{HttpMethod, Request};
    use crate::state::request_group::{ChildRef, RequestGroup};

    fn sample() -> Workspace {
        let mut group = RequestGroup::new("Users");
        group.collapsed = true;
        group.children.push(ChildRef::new("r1"));
        Workspace {
            name: "api".into(),
            requests: vec![Request::with_id("r1", HttpMethod::Post, "Create user")],
            request_groups: vec![group],
        }
    }

    #[test]
    fn test_save_then_load_keeps_collapsed_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api").join(WORKSPACE_FILE);
        save_to_path(&path, &sample()).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, sample());
        assert!(loaded.request_groups[0].collapsed);
    }

    #[test]
    fn test_missing_file_gives_empty_workspace_named_after_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch").join(WORKSPACE_FILE);
        let ws = load_or_empty(&path).unwrap();
        assert_eq!(ws.name, "scratch");
        assert!(ws.requests.is_empty());
    }

    #[test]
    fn test_load_json_export_with_camel_case_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{
                "name": "exported",
                "requests": [{"id": "r1", "method": "GET", "name": "Users"}],
                "requestGroups": [{"id": "g1", "name": "All", "children": [{"id": "r1"}]}]
            }"#,
        )
        .unwrap();
        let ws = load_from_path(&path).unwrap();
        assert_eq!(ws.request_groups.len(), 1);
        assert!(!ws.request_groups[0].collapsed);
        assert_eq!(ws.requests[0].method, HttpMethod::Get);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ws.yaml");
        std::fs::write(&path, "name: x").unwrap();
        assert!(matches!(load_from_path(&path), Err(AppError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unparseable_workspace_is_an_error_and_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api").join(WORKSPACE_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let original = r#"name = "api"

[[requests]]
id = "r1"
method = "GET"
name = "Users"

[[requests]]
id = "r2"
method = "FETCH"
name = "Orders"
"#;
        std::fs::write(&path, original).unwrap();

        assert!(matches!(load_or_empty(&path), Err(AppError::TomlDe(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_lowercase_method_in_json_export_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{"name": "x", "requests": [{"id": "r1", "method": "get", "name": "Users"}]}"#,
        )
        .unwrap();
        assert!(matches!(load_or_empty(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_unsupported_extension_is_not_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ws.yaml");
        std::fs::write(&path, "name: x").unwrap();
        assert!(load_or_empty(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: x");
    }
}
