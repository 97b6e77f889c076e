use clap::Args;
use serde::Serialize;

use webfix::casing::{self, CasingMismatch, ReadError};
use webfix::log_status;
use webfix::paths::resolve_root;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct CasingArgs {
    /// Root directory of the front-end project (supports ~)
    pub root: String,

    /// Subdirectory of root whose filenames are indexed case-insensitively
    #[arg(long, default_value = "components/ui")]
    pub index_dir: String,

    /// Import alias prefix matched in `from "<prefix>/<name>"` statements
    #[arg(long, default_value = "@/components/ui")]
    pub prefix: String,

    /// File extensions to scan (repeatable)
    #[arg(long = "ext", default_values_t = [String::from("ts"), String::from("tsx")])]
    pub extensions: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum CasingOutput {
    #[serde(rename = "casing.scan")]
    Scan {
        root: String,
        index_dir: String,
        prefix: String,
        files_scanned: usize,
        mismatches: Vec<CasingMismatch>,
        read_errors: Vec<ReadError>,
    },
}

pub fn run(args: CasingArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<CasingOutput> {
    let root = resolve_root(&args.root)?;

    let report = casing::scan_casing(&root, &args.index_dir, &args.prefix, &args.extensions)?;

    for mismatch in &report.mismatches {
        log_status!(
            "casing",
            "Mismatch in {}: imports '{}' but file is '{}'",
            mismatch.file,
            mismatch.import,
            mismatch.actual_file
        );
    }
    for read_error in &report.read_errors {
        log_status!("casing", "Error reading {}: {}", read_error.file, read_error.error);
    }

    let exit_code = if report.mismatches.is_empty() { 0 } else { 1 };

    Ok((
        CasingOutput::Scan {
            root: root.display().to_string(),
            index_dir: args.index_dir,
            prefix: args.prefix,
            files_scanned: report.files_scanned,
            mismatches: report.mismatches,
            read_errors: report.read_errors,
        },
        exit_code,
    ))
}
