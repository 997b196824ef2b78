use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportWriteError {
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report file: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Result file contents: what was computed, from which inputs, and when.
#[derive(Serialize, Debug)]
pub struct ReportDocument<'a, I: Serialize, O: Serialize> {
    pub mode: &'a str,
    pub generated_on: String,
    pub inputs: &'a I,
    pub outputs: &'a O,
}

impl<'a, I: Serialize, O: Serialize> ReportDocument<'a, I, O> {
    pub fn new(mode: &'a str, inputs: &'a I, outputs: &'a O) -> Self {
        Self::dated(mode, inputs, outputs, Local::now().date_naive())
    }

    pub fn dated(mode: &'a str, inputs: &'a I, outputs: &'a O, date: NaiveDate) -> Self {
        Self {
            mode,
            generated_on: date.format("%Y-%m-%d").to_string(),
            inputs,
            outputs,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, ReportWriteError> {
        Ok(match format {
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    pub fn write_to_file(&self, path: &str, format: OutputFormat) -> Result<(), ReportWriteError> {
        let contents = self.render(format)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioInputs;
    use crate::services::config_yaml::RoiConfig;
    use crate::services::roi_engine::calculate;

    fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn render_yaml_contains_inputs_and_outputs() {
        let inputs = ScenarioInputs::default();
        let outputs = calculate(&inputs, &RoiConfig::default()).unwrap();
        let document = ReportDocument::dated("integration", &inputs, &outputs, on_date(2026, 3, 2));

        let yaml = document.render(OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("mode: integration"));
        assert!(yaml.contains("generated_on: 2026-03-02"));
        assert!(yaml.contains("developer_rate: 45.0"));
        assert!(yaml.contains("category: maintenance"));
        assert!(yaml.contains("five_year_savings:"));
    }

    #[test]
    fn render_json_is_valid_json() {
        let inputs = ScenarioInputs::default();
        let outputs = calculate(&inputs, &RoiConfig::default()).unwrap();
        let document = ReportDocument::dated("integration", &inputs, &outputs, on_date(2026, 3, 2));

        let json = document.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outputs"]["categories"][1]["category"], "development");
        assert_eq!(value["outputs"]["categories"][1]["savings"], 81000.0);
    }
}
