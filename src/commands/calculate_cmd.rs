use std::process::ExitCode;

use log::{info, warn};

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_roi_report;
use crate::domain::scenario::ScenarioInputs;
use crate::services::config_yaml::load_config_if_provided;
use crate::services::report_yaml::ReportDocument;
use crate::services::roi_engine::calculate;
use crate::services::savings_chart::write_savings_chart_png;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn calculate_command(cmd: Commands) -> ExitCode {
    if let Commands::Calculate {
        input,
        defaults: _,
        output,
        config,
        chart,
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

        let inputs = match input.as_deref() {
            Some(path) => match load_scenario_from_yaml_file(path) {
                Ok(inputs) => {
                    info!("loaded scenario from {path}");
                    inputs
                }
                Err(e) => {
                    eprintln!("Failed to load scenario: {e}");
                    return ExitCode::FAILURE;
                }
            },
            None => {
                info!("using built-in default scenario");
                ScenarioInputs::default()
            }
        };

        let outputs = match calculate(&inputs, &config) {
            Ok(outputs) => outputs,
            Err(e) => {
                eprintln!("Failed to calculate ROI: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Report is written last; a failed step leaves neither file on disk.
        let chart_path = chart.unwrap_or_else(|| format!("{output}.png"));
        if let Err(e) = write_savings_chart_png(&chart_path, &outputs) {
            eprintln!("Failed to write cost comparison chart: {e}");
            return ExitCode::FAILURE;
        }

        let document = ReportDocument::new("integration", &inputs, &outputs);
        if let Err(e) = document.write_to_file(&output, format) {
            eprintln!("Failed to write ROI report: {e}");
            if let Err(e) = std::fs::remove_file(&chart_path) {
                warn!("failed to remove chart {chart_path}: {e}");
            }
            return ExitCode::FAILURE;
        }

        println!("{}", format_roi_report(&outputs, &config.currency_symbol));
        println!("ROI report written to {output}");
        println!("Cost comparison chart written to {chart_path}");
    }
    ExitCode::SUCCESS
}
