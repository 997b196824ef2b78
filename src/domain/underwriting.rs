use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnderwritingInputs {
    pub applicants: u32,
    pub underwriting_pct: f64,
    pub efficiency_gain_pct: f64,
    pub income_per_applicant: f64,
}

impl Default for UnderwritingInputs {
    fn default() -> Self {
        Self {
            applicants: 10_000,
            underwriting_pct: 60.0,
            efficiency_gain_pct: 25.0,
            income_per_applicant: 1_200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnderwritingOutputs {
    pub current_underwritten: f64,
    pub additional_capacity: f64,
    pub revenue_increase: f64,
    pub five_year_revenue_increase: f64,
}
