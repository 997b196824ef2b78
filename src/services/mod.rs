pub mod config_yaml;
pub mod currency;
pub mod genai_automation;
pub mod report_yaml;
pub mod roi_engine;
pub mod roi_error;
pub mod savings_chart;
pub mod scenario_yaml;
pub mod underwriting;
pub mod validation;
