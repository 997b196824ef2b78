use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use roi::commands::base_commands::{CliArgs, Commands};
use roi::commands::calculate_cmd::calculate_command;
use roi::commands::completions_cmd::completions_command;
use roi::commands::genai_cmd::genai_command;
use roi::commands::init_cmd::init_command;
use roi::commands::underwriting_cmd::underwriting_command;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // RUST_LOG takes precedence over -v
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::Genai { .. } => genai_command(cmd),
        cmd @ Commands::Underwriting { .. } => underwriting_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
