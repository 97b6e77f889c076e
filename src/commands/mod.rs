use std::io::Read;
use std::path::Path;

pub type CmdResult<T> = webfix::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

// ============================================================================
// JSON Input Parsing (CLI layer)
// ============================================================================

/// Read a JSON spec from string, file (@path), or stdin (-).
pub fn read_json_spec_to_string(spec: &str) -> webfix::Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(webfix::Error::validation_invalid_argument(
                "rules",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
            ));
        }
        stdin.read_to_string(&mut buf).map_err(|e| {
            webfix::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
        })?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(webfix::Error::validation_invalid_argument(
                "rules",
                "Invalid JSON spec '@' (missing file path)",
                None,
            ));
        }
        return std::fs::read_to_string(Path::new(path)).map_err(|e| {
            webfix::Error::internal_io(e.to_string(), Some(format!("read {}", path)))
        });
    }

    Ok(spec.to_string())
}

pub mod casing;
pub mod directive;
pub mod rewrite;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (webfix::Result<serde_json::Value>, i32) {
    crate::tty::status("webfix is working...");

    match command {
        crate::Commands::Casing(args) => dispatch!(args, global, casing),
        crate::Commands::Rewrite(args) => dispatch!(args, global, rewrite),
        crate::Commands::Directive(args) => dispatch!(args, global, directive),
        crate::Commands::List => unreachable!("handled in main"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_passes_through_inline_json() {
        let raw = read_json_spec_to_string("{\"a\":\"b\"}").unwrap();
        assert_eq!(raw, "{\"a\":\"b\"}");
    }

    #[test]
    fn spec_reads_at_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, "{\"old\":\"new\"}").unwrap();

        let raw = read_json_spec_to_string(&format!("@{}", path.display())).unwrap();
        assert_eq!(raw, "{\"old\":\"new\"}");
    }

    #[test]
    fn spec_rejects_bare_at() {
        let err = read_json_spec_to_string("@").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
