//! Directory traversal shared by the scan and fix operations.
//!
//! Sequential, synchronous walk with a fixed skip list for dependency and
//! build-output directories. Unreadable directories are skipped silently;
//! per-file read errors are the caller's concern.

use std::path::{Path, PathBuf};

/// Directories never descended into, at any depth.
const SKIP_DIRS: &[&str] = &["node_modules", ".next", ".git", ".svn", ".hg", "dist", "out"];

/// Collect all files under `root` whose extension is in `extensions`.
pub fn walk_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_recursive(root, extensions, &mut files);
    files.sort();
    files
}

fn walk_recursive(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            walk_recursive(&path, extensions, files);
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if extensions.iter().any(|e| e == ext) {
                files.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walk_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.ts"), "").unwrap();
        std::fs::write(dir.path().join("b.tsx"), "").unwrap();
        std::fs::write(dir.path().join("c.css"), "").unwrap();

        let files = walk_files(dir.path(), &exts(&["ts", "tsx"]));
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() != "css"));
    }

    #[test]
    fn walk_skips_dependency_dirs() {
        let dir = TempDir::new().unwrap();
        let nm = dir.path().join("node_modules").join("pkg");
        let next = dir.path().join(".next");
        std::fs::create_dir_all(&nm).unwrap();
        std::fs::create_dir_all(&next).unwrap();
        std::fs::write(nm.join("index.ts"), "").unwrap();
        std::fs::write(next.join("chunk.ts"), "").unwrap();
        std::fs::write(dir.path().join("app.ts"), "").unwrap();

        let files = walk_files(dir.path(), &exts(&["ts"]));
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.ts"));
    }

    #[test]
    fn walk_descends_into_regular_subdirs() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("components").join("visualizer");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("Panel.tsx"), "").unwrap();

        let files = walk_files(dir.path(), &exts(&["tsx"]));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn walk_of_missing_dir_is_empty() {
        let files = walk_files(Path::new("/nonexistent/tree"), &exts(&["ts"]));
        assert!(files.is_empty());
    }
}
