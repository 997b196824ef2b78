use crate::domain::outputs::PROJECTION_YEARS;
use crate::domain::underwriting::{UnderwritingInputs, UnderwritingOutputs};
use crate::services::roi_error::{RoiError, ensure_finite};
use crate::services::validation::validate_underwriting;

/// Revenue from the extra applicants a faster underwriting team can process.
pub fn calculate_underwriting(inputs: &UnderwritingInputs) -> Result<UnderwritingOutputs, RoiError> {
    validate_underwriting(inputs)?;

    let current_underwritten = f64::from(inputs.applicants) * (inputs.underwriting_pct / 100.0);
    let additional_capacity = current_underwritten * (inputs.efficiency_gain_pct / 100.0);
    let revenue_increase = ensure_finite(
        additional_capacity * inputs.income_per_applicant,
        "revenue increase",
    )?;

    Ok(UnderwritingOutputs {
        current_underwritten,
        additional_capacity,
        revenue_increase,
        five_year_revenue_increase: revenue_increase * PROJECTION_YEARS,
    })
}
