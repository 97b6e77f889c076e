//! Client-directive injector — prepend `"use client"` to component files that
//! use client-only hooks but lack the directive.
//!
//! A file needs the directive when it contains the trigger keyword and neither
//! the double- nor single-quoted form of the directive. Injection prepends the
//! double-quoted directive followed by a blank line, so a second run leaves
//! the file untouched.

use crate::error::Result;
use crate::io::{read_file, write_file};
use crate::walk::walk_files;
use serde::Serialize;
use std::path::Path;

/// What to inject and what triggers it.
#[derive(Debug, Clone)]
pub struct DirectiveSpec {
    /// Directive text without quotes, e.g. `use client`.
    pub directive: String,
    /// Substring whose presence marks a file as needing the directive.
    pub keyword: String,
}

impl DirectiveSpec {
    pub fn new(directive: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            keyword: keyword.into(),
        }
    }

    fn double_quoted(&self) -> String {
        format!("\"{}\"", self.directive)
    }

    fn single_quoted(&self) -> String {
        format!("'{}'", self.directive)
    }
}

impl Default for DirectiveSpec {
    fn default() -> Self {
        Self::new("use client", "useState")
    }
}

/// A file the injector will prepend the directive to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Injection {
    /// File path relative to root.
    pub file: String,
    #[serde(skip)]
    pub new_content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectResult {
    pub directive: String,
    pub keyword: String,
    pub injections: Vec<Injection>,
    pub files_scanned: usize,
    pub applied: bool,
}

/// True when `content` uses the keyword but carries the directive in neither
/// quote form.
pub fn needs_directive(content: &str, spec: &DirectiveSpec) -> bool {
    content.contains(&spec.keyword)
        && !content.contains(&spec.double_quoted())
        && !content.contains(&spec.single_quoted())
}

/// Prepend the directive and a blank line.
pub fn inject(content: &str, spec: &DirectiveSpec) -> String {
    format!("{}\n\n{}", spec.double_quoted(), content)
}

/// Walk the subtree under `root` and collect the files needing the directive.
pub fn plan_injections(
    spec: &DirectiveSpec,
    root: &Path,
    extensions: &[String],
) -> Result<InjectResult> {
    let files = walk_files(root, extensions);
    let mut injections = Vec::new();

    for file_path in &files {
        let content = read_file(file_path, &format!("read {}", file_path.display()))?;

        if needs_directive(&content, spec) {
            let relative = file_path
                .strip_prefix(root)
                .unwrap_or(file_path)
                .to_string_lossy()
                .to_string();
            injections.push(Injection {
                file: relative,
                new_content: inject(&content, spec),
            });
        }
    }

    Ok(InjectResult {
        directive: spec.directive.clone(),
        keyword: spec.keyword.clone(),
        injections,
        files_scanned: files.len(),
        applied: false,
    })
}

/// Write planned injections to disk, in place.
pub fn apply_injections(result: &mut InjectResult, root: &Path) -> Result<()> {
    for injection in &result.injections {
        let path = root.join(&injection.file);
        crate::log_status!("directive", "Adding '{}' to {}", result.directive, injection.file);
        write_file(&path, &injection.new_content, &format!("write {}", path.display()))?;
    }

    result.applied = true;
    Ok(())
}
