use serde::Serialize;

use crate::domain::rate::RateBasis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralInputs {
    pub developer_rate: f64,
    pub rate_basis: RateBasis,
}

/// The "without the product" cost structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineInputs {
    pub months_to_onboard: u32,
    pub onboarding_capacity_pct: f64,
    pub existing_integrations: u32,
    pub integrations_per_year: u32,
    pub hours_per_integration: f64,
    pub supporting_headcount: u32,
    pub maintenance_capacity_pct: f64,
}

/// Values entered directly for the "with the product" arm. Everything not
/// listed here is derived from the baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ImprovedOverrides {
    pub integrations_per_year: Option<u32>,
    pub integrations_to_migrate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScenarioInputs {
    pub general: GeneralInputs,
    pub baseline: BaselineInputs,
    pub improved: ImprovedOverrides,
}

impl Default for GeneralInputs {
    fn default() -> Self {
        Self {
            developer_rate: 45.0,
            rate_basis: RateBasis::Hourly,
        }
    }
}

impl Default for BaselineInputs {
    fn default() -> Self {
        Self {
            months_to_onboard: 24,
            onboarding_capacity_pct: 20.0,
            existing_integrations: 20,
            integrations_per_year: 10,
            hours_per_integration: 200.0,
            supporting_headcount: 10,
            maintenance_capacity_pct: 50.0,
        }
    }
}
