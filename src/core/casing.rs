//! Casing scanner: detect imports whose referenced filename differs from the
//! on-disk filename only in letter case.
//!
//! Builds a case-insensitive index of one directory, then walks the tree
//! extracting alias imports and checking each against the index.

use crate::error::{Error, Result};
use crate::walk::walk_files;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Extensions tried, in order, when resolving an import name to a file in the
/// indexed directory.
const CANDIDATE_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Case-insensitive index of the filenames in one directory:
/// lowercased filename → actual filename.
#[derive(Debug, Clone)]
pub struct CasingIndex {
    entries: HashMap<String, String>,
}

impl CasingIndex {
    /// Build the index from the direct children of `dir` (non-recursive,
    /// files only).
    pub fn build(dir: &Path) -> Result<Self> {
        let entries_iter = std::fs::read_dir(dir).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("index {}", dir.display())))
        })?;

        let mut entries = HashMap::new();
        for entry in entries_iter.flatten() {
            if entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            entries.insert(name.to_lowercase(), name);
        }

        Ok(Self { entries })
    }

    /// Look up a filename ignoring case, returning the actual on-disk name.
    pub fn lookup(&self, filename: &str) -> Option<&str> {
        self.entries.get(&filename.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One import whose case disagrees with the file on disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasingMismatch {
    /// File containing the import, relative to root.
    pub file: String,
    /// The imported name as written (path segment after the alias prefix).
    pub import: String,
    /// Filename the import implies.
    pub expected_file: String,
    /// Filename actually on disk.
    pub actual_file: String,
}

/// A file that could not be read during the scan. The walk continues past it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadError {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasingReport {
    pub mismatches: Vec<CasingMismatch>,
    pub read_errors: Vec<ReadError>,
    pub files_scanned: usize,
}

/// Scan the tree under `root` for alias imports whose case disagrees with the
/// files under `root/index_dir`.
///
/// Imports are extracted with `from "<prefix>/<name>"`. Names with no
/// case-insensitive match in the index are ignored (assumed to be
/// subdirectories of the indexed directory).
pub fn scan_casing(
    root: &Path,
    index_dir: &str,
    prefix: &str,
    extensions: &[String],
) -> Result<CasingReport> {
    let index = CasingIndex::build(&root.join(index_dir))?;

    let pattern = format!(r#"from "{}/([^"]+)""#, regex::escape(prefix));
    let import_re = Regex::new(&pattern).map_err(|e| {
        Error::validation_invalid_argument("prefix", e.to_string(), Some(prefix.to_string()))
    })?;

    let files = walk_files(root, extensions);
    let mut mismatches = Vec::new();
    let mut read_errors = Vec::new();

    for file_path in &files {
        let relative = file_path
            .strip_prefix(root)
            .unwrap_or(file_path)
            .to_string_lossy()
            .to_string();

        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                read_errors.push(ReadError {
                    file: relative,
                    error: e.to_string(),
                });
                continue;
            }
        };

        for capture in import_re.captures_iter(&content) {
            let import = &capture[1];

            for ext in CANDIDATE_EXTENSIONS {
                let expected = format!("{}.{}", import, ext);
                if let Some(actual) = index.lookup(&expected) {
                    if actual != expected {
                        mismatches.push(CasingMismatch {
                            file: relative.clone(),
                            import: import.to_string(),
                            expected_file: expected,
                            actual_file: actual.to_string(),
                        });
                    }
                    // Resolved against the index, stop trying extensions.
                    break;
                }
            }
        }
    }

    Ok(CasingReport {
        mismatches,
        read_errors,
        files_scanned: files.len(),
    })
}
