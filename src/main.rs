use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{casing, directive, rewrite, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "webfix")]
#[command(version = VERSION)]
#[command(about = "CLI tool for front-end source tree maintenance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for import/filename casing mismatches
    #[command(visible_alias = "check-casing")]
    Casing(casing::CasingArgs),
    /// Rewrite import paths from a substitution table
    Rewrite(rewrite::RewriteArgs),
    /// Inject a client directive into files using client-only hooks
    Directive(directive::DirectiveArgs),
    /// List available commands (alias for --help)
    List,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {};

    if matches!(cli.command, Commands::List) {
        let mut cmd = Cli::command();
        cmd.print_help().expect("Failed to print help");
        println!();
        return std::process::ExitCode::SUCCESS;
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    let _ = output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
