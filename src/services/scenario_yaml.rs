use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::genai::GenAiInputs;
use crate::domain::rate::RateBasis;
use crate::domain::scenario::{BaselineInputs, GeneralInputs, ImprovedOverrides, ScenarioInputs};
use crate::domain::underwriting::UnderwritingInputs;
use crate::services::roi_error::RoiError;
use crate::services::validation::count;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] RoiError),
}

// Missing fields fall back to the default scenario, mirroring the form's defaults.
// Counts are read as signed integers so a negative entry is reported against
// its field instead of as a generic parse failure.

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ScenarioRecord {
    general: GeneralRecord,
    baseline: BaselineRecord,
    improved: ImprovedRecord,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct GeneralRecord {
    developer_rate: Option<f64>,
    rate_basis: Option<RateBasis>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct BaselineRecord {
    months_to_onboard: Option<i64>,
    onboarding_capacity_pct: Option<f64>,
    existing_integrations: Option<i64>,
    integrations_per_year: Option<i64>,
    hours_per_integration: Option<f64>,
    supporting_headcount: Option<i64>,
    maintenance_capacity_pct: Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ImprovedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    integrations_per_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    integrations_to_migrate: Option<i64>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct GenAiRecord {
    employees: Option<i64>,
    hours_per_task: Option<f64>,
    hourly_rate: Option<f64>,
    tasks_per_year_per_employee: Option<i64>,
    reduction_pct: Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct UnderwritingRecord {
    applicants: Option<i64>,
    underwriting_pct: Option<f64>,
    efficiency_gain_pct: Option<f64>,
    income_per_applicant: Option<f64>,
}

fn count_or(field: &str, value: Option<i64>, default: u32) -> Result<u32, RoiError> {
    value.map_or(Ok(default), |value| count(field, value))
}

fn optional_count(field: &str, value: Option<i64>) -> Result<Option<u32>, RoiError> {
    value.map(|value| count(field, value)).transpose()
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<ScenarioInputs, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<ScenarioInputs, ScenarioYamlError> {
    let record: ScenarioRecord = if input.trim().is_empty() {
        ScenarioRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };
    let defaults = ScenarioInputs::default();

    let general = GeneralInputs {
        developer_rate: record
            .general
            .developer_rate
            .unwrap_or(defaults.general.developer_rate),
        rate_basis: record.general.rate_basis.unwrap_or(defaults.general.rate_basis),
    };

    let b = record.baseline;
    let d = defaults.baseline;
    let baseline = BaselineInputs {
        months_to_onboard: count_or("baseline.months_to_onboard", b.months_to_onboard, d.months_to_onboard)?,
        onboarding_capacity_pct: b.onboarding_capacity_pct.unwrap_or(d.onboarding_capacity_pct),
        existing_integrations: count_or(
            "baseline.existing_integrations",
            b.existing_integrations,
            d.existing_integrations,
        )?,
        integrations_per_year: count_or(
            "baseline.integrations_per_year",
            b.integrations_per_year,
            d.integrations_per_year,
        )?,
        hours_per_integration: b.hours_per_integration.unwrap_or(d.hours_per_integration),
        supporting_headcount: count_or(
            "baseline.supporting_headcount",
            b.supporting_headcount,
            d.supporting_headcount,
        )?,
        maintenance_capacity_pct: b.maintenance_capacity_pct.unwrap_or(d.maintenance_capacity_pct),
    };

    let improved = ImprovedOverrides {
        integrations_per_year: optional_count(
            "improved.integrations_per_year",
            record.improved.integrations_per_year,
        )?,
        integrations_to_migrate: optional_count(
            "improved.integrations_to_migrate",
            record.improved.integrations_to_migrate,
        )?,
    };

    Ok(ScenarioInputs {
        general,
        baseline,
        improved,
    })
}

/// Writes `inputs` in the scenario file format, suitable as an editable template.
pub fn serialize_scenario_to_yaml<W: Write>(writer: &mut W, inputs: &ScenarioInputs) -> io::Result<()> {
    let baseline = &inputs.baseline;
    let record = ScenarioRecord {
        general: GeneralRecord {
            developer_rate: Some(inputs.general.developer_rate),
            rate_basis: Some(inputs.general.rate_basis),
        },
        baseline: BaselineRecord {
            months_to_onboard: Some(i64::from(baseline.months_to_onboard)),
            onboarding_capacity_pct: Some(baseline.onboarding_capacity_pct),
            existing_integrations: Some(i64::from(baseline.existing_integrations)),
            integrations_per_year: Some(i64::from(baseline.integrations_per_year)),
            hours_per_integration: Some(baseline.hours_per_integration),
            supporting_headcount: Some(i64::from(baseline.supporting_headcount)),
            maintenance_capacity_pct: Some(baseline.maintenance_capacity_pct),
        },
        improved: ImprovedRecord {
            integrations_per_year: inputs.improved.integrations_per_year.map(i64::from),
            integrations_to_migrate: inputs.improved.integrations_to_migrate.map(i64::from),
        },
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn load_genai_from_yaml_file(path: &str) -> Result<GenAiInputs, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_genai_from_yaml_str(&contents)
}

pub fn deserialize_genai_from_yaml_str(input: &str) -> Result<GenAiInputs, ScenarioYamlError> {
    let record: GenAiRecord = if input.trim().is_empty() {
        GenAiRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };
    let d = GenAiInputs::default();

    Ok(GenAiInputs {
        employees: count_or("employees", record.employees, d.employees)?,
        hours_per_task: record.hours_per_task.unwrap_or(d.hours_per_task),
        hourly_rate: record.hourly_rate.unwrap_or(d.hourly_rate),
        tasks_per_year_per_employee: count_or(
            "tasks_per_year_per_employee",
            record.tasks_per_year_per_employee,
            d.tasks_per_year_per_employee,
        )?,
        reduction_pct: record.reduction_pct.unwrap_or(d.reduction_pct),
    })
}

pub fn load_underwriting_from_yaml_file(path: &str) -> Result<UnderwritingInputs, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_underwriting_from_yaml_str(&contents)
}

pub fn deserialize_underwriting_from_yaml_str(
    input: &str,
) -> Result<UnderwritingInputs, ScenarioYamlError> {
    let record: UnderwritingRecord = if input.trim().is_empty() {
        UnderwritingRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };
    let d = UnderwritingInputs::default();

    Ok(UnderwritingInputs {
        applicants: count_or("applicants", record.applicants, d.applicants)?,
        underwriting_pct: record.underwriting_pct.unwrap_or(d.underwriting_pct),
        efficiency_gain_pct: record.efficiency_gain_pct.unwrap_or(d.efficiency_gain_pct),
        income_per_applicant: record.income_per_applicant.unwrap_or(d.income_per_applicant),
    })
}
