use clap::Args;
use serde::Serialize;

use webfix::paths::resolve_root;
use webfix::rewrite::{self, RewriteRule};
use webfix::Error;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct RewriteArgs {
    /// Root directory to rewrite under (supports ~)
    pub root: String,

    /// Substitution as OLD=NEW, applied in given order (repeatable)
    #[arg(long = "rule", value_name = "OLD=NEW")]
    pub rules: Vec<String>,

    /// JSON array of {"from", "to"} rules; supports @file and - for stdin
    #[arg(long = "rules", value_name = "JSON")]
    pub rules_json: Option<String>,

    /// File extensions to rewrite (repeatable)
    #[arg(long = "ext", default_values_t = [String::from("ts"), String::from("tsx")])]
    pub extensions: Vec<String>,

    /// Plan only, write nothing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RewriteOutput {
    #[serde(rename = "rewrite.apply")]
    Apply {
        root: String,
        dry_run: bool,
        rules: Vec<RewriteRule>,
        files_scanned: usize,
        total_replacements: usize,
        edits: Vec<EditSummary>,
        applied: bool,
    },
}

#[derive(Serialize)]
pub struct EditSummary {
    pub file: String,
    pub replacements: usize,
}

/// Collect the substitution table: JSON rules first, then --rule flags in
/// given order.
fn collect_rules(rules_json: Option<&str>, rule_flags: &[String]) -> webfix::Result<Vec<RewriteRule>> {
    let mut rules = Vec::new();

    if let Some(spec) = rules_json {
        let raw = crate::commands::read_json_spec_to_string(spec)?;
        let parsed: Vec<RewriteRule> = serde_json::from_str(&raw)
            .map_err(|e| Error::validation_invalid_json(e, Some("parse rules".to_string())))?;
        rules.extend(parsed);
    }

    for pair in rule_flags {
        rules.push(RewriteRule::parse(pair)?);
    }

    if rules.is_empty() {
        return Err(Error::validation_missing_argument(vec![
            "--rule".to_string(),
            "--rules".to_string(),
        ]));
    }

    Ok(rules)
}

pub fn run(args: RewriteArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RewriteOutput> {
    let root = resolve_root(&args.root)?;
    let rules = collect_rules(args.rules_json.as_deref(), &args.rules)?;

    let mut result = rewrite::plan_rewrites(&rules, &root, &args.extensions)?;

    if !args.dry_run {
        rewrite::apply_rewrites(&mut result, &root)?;
    }

    let total_replacements = result.edits.iter().map(|e| e.replacements).sum();

    Ok((
        RewriteOutput::Apply {
            root: root.display().to_string(),
            dry_run: args.dry_run,
            rules: result.rules,
            files_scanned: result.files_scanned,
            total_replacements,
            edits: result
                .edits
                .iter()
                .map(|e| EditSummary {
                    file: e.file.clone(),
                    replacements: e.replacements,
                })
                .collect(),
            applied: result.applied,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_rules_from_flags_preserves_order() {
        let flags = vec!["a=b".to_string(), "b=c".to_string()];
        let rules = collect_rules(None, &flags).unwrap();
        assert_eq!(rules[0], RewriteRule::new("a", "b"));
        assert_eq!(rules[1], RewriteRule::new("b", "c"));
    }

    #[test]
    fn collect_rules_from_json_array() {
        let json = r#"[{"from":"@/components/shared/code-display","to":"@/components/visualizer/CodePanel"}]"#;
        let rules = collect_rules(Some(json), &[]).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].to, "@/components/visualizer/CodePanel");
    }

    #[test]
    fn collect_rules_json_then_flags() {
        let json = r#"[{"from":"x","to":"y"}]"#;
        let flags = vec!["y=z".to_string()];
        let rules = collect_rules(Some(json), &flags).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1], RewriteRule::new("y", "z"));
    }

    #[test]
    fn collect_rules_requires_at_least_one() {
        let err = collect_rules(None, &[]).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.missing_argument");
    }

    #[test]
    fn collect_rules_rejects_malformed_json() {
        let err = collect_rules(Some("{not json"), &[]).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn collect_rules_rejects_object_form() {
        // Table order is semantic and JSON objects do not preserve key order,
        // so only the array form is accepted.
        let err = collect_rules(Some(r#"{"old":"new"}"#), &[]).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }
}
