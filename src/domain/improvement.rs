use serde::{Deserialize, Serialize};

use crate::domain::scenario::ScenarioInputs;

/// Multiplicative ratios turning baseline values into the "with the product" arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImprovementFactors {
    pub onboarding_months: f64,
    pub maintenance_capacity: f64,
    pub build_hours: f64,
    pub supporting_headcount: f64,
}

impl Default for ImprovementFactors {
    fn default() -> Self {
        Self {
            onboarding_months: 0.10,
            maintenance_capacity: 0.50,
            build_hours: 0.10,
            supporting_headcount: 0.30,
        }
    }
}

/// Parameters of the "with the product" arm after applying the improvement factors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovedParameters {
    pub months_to_onboard: f64,
    pub onboarding_capacity_pct: f64,
    pub hours_per_integration: f64,
    pub supporting_headcount: f64,
    pub maintenance_capacity_pct: f64,
    pub integrations_per_year: u32,
    pub integrations_to_migrate: u32,
}

impl ImprovedParameters {
    /// Derives the improved arm. Onboarding months and headcount are counts, so
    /// they are truncated toward zero when `truncate_counts` is set.
    pub fn derive(
        inputs: &ScenarioInputs,
        factors: &ImprovementFactors,
        truncate_counts: bool,
    ) -> Self {
        let baseline = &inputs.baseline;
        let count = |value: f64| if truncate_counts { value.trunc() } else { value };

        Self {
            months_to_onboard: count(f64::from(baseline.months_to_onboard) * factors.onboarding_months),
            onboarding_capacity_pct: baseline.onboarding_capacity_pct,
            hours_per_integration: baseline.hours_per_integration * factors.build_hours,
            supporting_headcount: count(
                f64::from(baseline.supporting_headcount) * factors.supporting_headcount,
            ),
            maintenance_capacity_pct: baseline.maintenance_capacity_pct
                * factors.maintenance_capacity,
            integrations_per_year: inputs
                .improved
                .integrations_per_year
                .unwrap_or(baseline.integrations_per_year),
            integrations_to_migrate: inputs
                .improved
                .integrations_to_migrate
                .unwrap_or(baseline.existing_integrations),
        }
    }
}
