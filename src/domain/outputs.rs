use std::fmt;

use serde::Serialize;

use crate::domain::improvement::ImprovedParameters;
use crate::domain::rate::ResolvedRate;

/// Multiplier for the simple (undiscounted) multi-year projection.
pub const PROJECTION_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsCategory {
    Onboarding,
    Development,
    Maintenance,
}

impl SavingsCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SavingsCategory::Onboarding => "Time to Value",
            SavingsCategory::Development => "Development",
            SavingsCategory::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCosts {
    pub category: SavingsCategory,
    pub baseline_cost: f64,
    pub improved_cost: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerIntegrationCosts {
    pub baseline_development: f64,
    pub improved_development: f64,
    pub baseline_maintenance: f64,
    pub improved_maintenance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutputs {
    pub rate: ResolvedRate,
    pub improved_parameters: ImprovedParameters,
    pub categories: Vec<CategoryCosts>,
    pub per_integration: PerIntegrationCosts,
    pub total_annual_savings: f64,
    pub five_year_savings: f64,
}

impl ScenarioOutputs {
    pub fn category(&self, category: SavingsCategory) -> Option<&CategoryCosts> {
        self.categories.iter().find(|costs| costs.category == category)
    }

    pub fn total_baseline_cost(&self) -> f64 {
        self.categories.iter().map(|costs| costs.baseline_cost).sum()
    }

    pub fn total_improved_cost(&self) -> f64 {
        self.categories.iter().map(|costs| costs.improved_cost).sum()
    }
}
