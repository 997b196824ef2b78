use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_genai_report;
use crate::services::config_yaml::load_config_if_provided;
use crate::services::genai_automation::calculate_genai;
use crate::services::report_yaml::ReportDocument;
use crate::services::scenario_yaml::load_genai_from_yaml_file;

pub fn genai_command(cmd: Commands) -> ExitCode {
    if let Commands::Genai {
        input,
        output,
        config,
        format,
    } = cmd
    {
        let config = match load_config_if_provided(config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::FAILURE;
            }
        };
        let inputs = match load_genai_from_yaml_file(&input) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Failed to load task automation inputs: {e}");
                return ExitCode::FAILURE;
            }
        };
        let outputs = match calculate_genai(&inputs) {
            Ok(outputs) => outputs,
            Err(e) => {
                eprintln!("Failed to calculate automation savings: {e}");
                return ExitCode::FAILURE;
            }
        };

        let document = ReportDocument::new("genai", &inputs, &outputs);
        if let Err(e) = document.write_to_file(&output, format) {
            eprintln!("Failed to write automation report: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_genai_report(&outputs, &config.currency_symbol));
        println!("Automation report written to {output}");
    }
    ExitCode::SUCCESS
}
