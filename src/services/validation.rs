//! Numeric range checks applied to form values before any formula runs.

use crate::domain::genai::GenAiInputs;
use crate::domain::scenario::ScenarioInputs;
use crate::domain::underwriting::UnderwritingInputs;
use crate::services::roi_error::RoiError;

pub fn non_negative(field: &str, value: f64) -> Result<f64, RoiError> {
    if !value.is_finite() {
        return Err(RoiError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(RoiError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(value)
}

pub fn percentage(field: &str, value: f64) -> Result<f64, RoiError> {
    let value = non_negative(field, value)?;
    if value > 100.0 {
        return Err(RoiError::invalid(
            field,
            format!("must be a percentage between 0 and 100, got {value}"),
        ));
    }
    Ok(value)
}

/// A multiplicative ratio that can only shrink the value it scales.
pub fn ratio(field: &str, value: f64) -> Result<f64, RoiError> {
    let value = non_negative(field, value)?;
    if value > 1.0 {
        return Err(RoiError::invalid(
            field,
            format!("must be a ratio between 0 and 1, got {value}"),
        ));
    }
    Ok(value)
}

/// Converts a raw count read from a form into a non-negative integer.
pub fn count(field: &str, value: i64) -> Result<u32, RoiError> {
    if value < 0 {
        return Err(RoiError::invalid(field, format!("must not be negative, got {value}")));
    }
    u32::try_from(value).map_err(|_| RoiError::invalid(field, format!("{value} is too large")))
}

pub fn validate_scenario(inputs: &ScenarioInputs) -> Result<(), RoiError> {
    non_negative("general.developer_rate", inputs.general.developer_rate)?;

    let baseline = &inputs.baseline;
    percentage("baseline.onboarding_capacity_pct", baseline.onboarding_capacity_pct)?;
    non_negative("baseline.hours_per_integration", baseline.hours_per_integration)?;
    percentage("baseline.maintenance_capacity_pct", baseline.maintenance_capacity_pct)?;
    Ok(())
}

pub fn validate_genai(inputs: &GenAiInputs) -> Result<(), RoiError> {
    non_negative("hours_per_task", inputs.hours_per_task)?;
    non_negative("hourly_rate", inputs.hourly_rate)?;
    percentage("reduction_pct", inputs.reduction_pct)?;
    Ok(())
}

pub fn validate_underwriting(inputs: &UnderwritingInputs) -> Result<(), RoiError> {
    percentage("underwriting_pct", inputs.underwriting_pct)?;
    non_negative("efficiency_gain_pct", inputs.efficiency_gain_pct)?;
    non_negative("income_per_applicant", inputs.income_per_applicant)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert!(validate_scenario(&ScenarioInputs::default()).is_ok());
    }

    #[test]
    fn rejects_negative_rate() {
        let mut inputs = ScenarioInputs::default();
        inputs.general.developer_rate = -1.0;

        let err = validate_scenario(&inputs).unwrap_err();
        assert!(
            matches!(err, RoiError::InvalidInput { ref field, .. } if field == "general.developer_rate")
        );
    }

    #[test]
    fn rejects_percentage_above_hundred() {
        let mut inputs = ScenarioInputs::default();
        inputs.baseline.maintenance_capacity_pct = 100.5;

        let err = validate_scenario(&inputs).unwrap_err();
        assert!(err.to_string().contains("baseline.maintenance_capacity_pct"));
    }

    #[test]
    fn rejects_nan() {
        assert!(non_negative("rate", f64::NAN).is_err());
    }

    #[test]
    fn accepts_percentage_bounds() {
        assert_eq!(percentage("pct", 0.0), Ok(0.0));
        assert_eq!(percentage("pct", 100.0), Ok(100.0));
    }

    #[test]
    fn ratio_accepts_unit_interval_only() {
        assert_eq!(ratio("factor", 0.0), Ok(0.0));
        assert_eq!(ratio("factor", 1.0), Ok(1.0));
        assert!(ratio("factor", 1.5).is_err());
        assert!(ratio("factor", -0.1).is_err());
    }

    #[test]
    fn count_rejects_negative_values() {
        assert_eq!(count("headcount", 3), Ok(3));
        assert!(count("headcount", -2).is_err());
    }

    #[test]
    fn efficiency_gain_may_exceed_hundred_percent() {
        let mut inputs = UnderwritingInputs::default();
        inputs.efficiency_gain_pct = 150.0;
        assert!(validate_underwriting(&inputs).is_ok());
    }
}
