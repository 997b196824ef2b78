use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::scenario::ScenarioInputs;
use crate::services::scenario_yaml::serialize_scenario_to_yaml;

pub fn init_command(cmd: Commands) -> ExitCode {
    if let Commands::Init { output } = cmd {
        let mut buffer = Vec::new();
        if let Err(e) = serialize_scenario_to_yaml(&mut buffer, &ScenarioInputs::default()) {
            eprintln!("Failed to serialize default scenario: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write scenario template: {e}");
            return ExitCode::FAILURE;
        }
        println!("Scenario template written to {output}");
    }
    ExitCode::SUCCESS
}
