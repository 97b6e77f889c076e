//! Import-path rewriter — apply an ordered table of literal old → new
//! substitutions across a subtree, rewriting only files whose content changed.
//!
//! Rules apply in table order, so a later rule sees the output of an earlier
//! one. Replacement is plain substring substitution with no boundary
//! detection; a second run over already-rewritten files is a no-op.

use crate::error::{Error, Result};
use crate::io::{read_file, write_file};
use crate::walk::walk_files;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single literal substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub from: String,
    pub to: String,
}

impl RewriteRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parse an `OLD=NEW` pair as given on the command line. The first `=`
    /// splits the pair, so replacement strings may contain `=`.
    pub fn parse(pair: &str) -> Result<Self> {
        let (from, to) = pair
            .split_once('=')
            .ok_or_else(|| Error::rules_invalid("Expected OLD=NEW", Some(pair.to_string())))?;

        if from.is_empty() {
            return Err(Error::rules_invalid(
                "Old string must not be empty",
                Some(pair.to_string()),
            ));
        }

        Ok(Self::new(from, to))
    }
}

/// A pending content change for one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEdit {
    /// File path relative to root.
    pub file: String,
    /// Number of substitutions across all rules.
    pub replacements: usize,
    /// New content after all substitutions.
    #[serde(skip)]
    pub new_content: String,
}

/// The outcome of planning (and optionally applying) a rewrite pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    pub rules: Vec<RewriteRule>,
    pub edits: Vec<FileEdit>,
    pub files_scanned: usize,
    pub applied: bool,
}

/// Apply `rules` in order to `content`, returning the new content and the
/// total substitution count.
pub fn apply_rules(content: &str, rules: &[RewriteRule]) -> (String, usize) {
    let mut new_content = content.to_string();
    let mut replacements = 0;

    for rule in rules {
        replacements += new_content.matches(&rule.from).count();
        new_content = new_content.replace(&rule.from, &rule.to);
    }

    (new_content, replacements)
}

/// Walk the subtree under `root` and compute the edits `rules` produce.
/// Nothing is written; pass the result to [`apply_rewrites`] to commit.
pub fn plan_rewrites(
    rules: &[RewriteRule],
    root: &Path,
    extensions: &[String],
) -> Result<RewriteResult> {
    if rules.is_empty() {
        return Err(Error::rules_invalid("No rules given", None));
    }

    let files = walk_files(root, extensions);
    let mut edits = Vec::new();

    for file_path in &files {
        let content = read_file(file_path, &format!("read {}", file_path.display()))?;

        let (new_content, replacements) = apply_rules(&content, rules);

        if new_content != content {
            let relative = file_path
                .strip_prefix(root)
                .unwrap_or(file_path)
                .to_string_lossy()
                .to_string();
            edits.push(FileEdit {
                file: relative,
                replacements,
                new_content,
            });
        }
    }

    Ok(RewriteResult {
        rules: rules.to_vec(),
        edits,
        files_scanned: files.len(),
        applied: false,
    })
}

/// Write planned edits to disk, in place. No backup is taken.
pub fn apply_rewrites(result: &mut RewriteResult, root: &Path) -> Result<()> {
    for edit in &result.edits {
        let path = root.join(&edit.file);
        crate::log_status!("rewrite", "Updating {}", edit.file);
        write_file(&path, &edit.new_content, &format!("write {}", path.display()))?;
    }

    result.applied = true;
    Ok(())
}
