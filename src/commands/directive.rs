use clap::Args;
use serde::Serialize;

use webfix::directive::{self, DirectiveSpec};
use webfix::paths::resolve_root;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct DirectiveArgs {
    /// Root directory to scan under (supports ~)
    pub root: String,

    /// Directive text, without quotes
    #[arg(long, default_value = "use client")]
    pub directive: String,

    /// Keyword whose presence triggers injection
    #[arg(long, default_value = "useState")]
    pub keyword: String,

    /// File extensions to scan (repeatable)
    #[arg(long = "ext", default_values_t = [String::from("tsx")])]
    pub extensions: Vec<String>,

    /// Plan only, write nothing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum DirectiveOutput {
    #[serde(rename = "directive.inject")]
    Inject {
        root: String,
        directive: String,
        keyword: String,
        dry_run: bool,
        files_scanned: usize,
        injected: Vec<String>,
        applied: bool,
    },
}

pub fn run(args: DirectiveArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<DirectiveOutput> {
    let root = resolve_root(&args.root)?;
    let spec = DirectiveSpec::new(&args.directive, &args.keyword);

    let mut result = directive::plan_injections(&spec, &root, &args.extensions)?;

    if !args.dry_run {
        directive::apply_injections(&mut result, &root)?;
    }

    Ok((
        DirectiveOutput::Inject {
            root: root.display().to_string(),
            directive: result.directive,
            keyword: result.keyword,
            dry_run: args.dry_run,
            files_scanned: result.files_scanned,
            injected: result.injections.iter().map(|i| i.file.clone()).collect(),
            applied: result.applied,
        },
        0,
    ))
}
