use std::io;
use std::process::ExitCode;

use clap::CommandFactory;

use crate::commands::base_commands::{CliArgs, Commands};

pub fn completions_command(cmd: Commands) -> ExitCode {
    if let Commands::Completions { shell } = cmd {
        let mut command = CliArgs::command();
        clap_complete::generate(shell, &mut command, "roi", &mut io::stdout());
    }
    ExitCode::SUCCESS
}
