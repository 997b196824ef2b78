use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_underwriting_report;
use crate::services::config_yaml::load_config_if_provided;
use crate::services::report_yaml::ReportDocument;
use crate::services::scenario_yaml::load_underwriting_from_yaml_file;
use crate::services::underwriting::calculate_underwriting;

pub fn underwriting_command(cmd: Commands) -> ExitCode {
    if let Commands::Underwriting {
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
        let inputs = match load_underwriting_from_yaml_file(&input) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Failed to load underwriting inputs: {e}");
                return ExitCode::FAILURE;
            }
        };
        let outputs = match calculate_underwriting(&inputs) {
            Ok(outputs) => outputs,
            Err(e) => {
                eprintln!("Failed to calculate underwriting capacity: {e}");
                return ExitCode::FAILURE;
            }
        };

        let document = ReportDocument::new("underwriting", &inputs, &outputs);
        if let Err(e) = document.write_to_file(&output, format) {
            eprintln!("Failed to write underwriting report: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_underwriting_report(&outputs, &config.currency_symbol));
        println!("Underwriting report written to {output}");
    }
    ExitCode::SUCCESS
}
