//! Root directory resolution for CLI arguments.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Expand `~` and validate that the root argument names an existing directory.
pub fn resolve_root(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path).to_string();
    let root = PathBuf::from(expanded);

    if !root.is_dir() {
        return Err(Error::root_not_found(root.display().to_string()));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_root_accepts_existing_dir() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn resolve_root_rejects_missing_dir() {
        let err = resolve_root("/nonexistent/front-end").unwrap_err();
        assert_eq!(err.code.as_str(), "root.not_found");
    }

    #[test]
    fn resolve_root_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.tsx");
        std::fs::write(&file, "").unwrap();
        assert!(resolve_root(&file.to_string_lossy()).is_err());
    }
}
