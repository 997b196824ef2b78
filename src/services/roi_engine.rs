//! Cost-savings formulas for the integration platform scenario.
//!
//! Every category is costed twice, once for the baseline ("without the
//! product") arm and once for the improved arm, and the difference is the
//! category's annual savings. Computation is pure: the same inputs and config
//! always yield the same outputs.

use log::debug;

use crate::domain::improvement::ImprovedParameters;
use crate::domain::outputs::{
    CategoryCosts, PerIntegrationCosts, PROJECTION_YEARS, SavingsCategory, ScenarioOutputs,
};
use crate::domain::rate::ResolvedRate;
use crate::domain::scenario::ScenarioInputs;
use crate::services::config_yaml::RoiConfig;
use crate::services::roi_error::{RoiError, checked_divide, ensure_finite};
use crate::services::validation::{percentage, validate_scenario};

/// Staff cost of onboarding onto the integration stack.
pub fn onboarding_cost(capacity_pct: f64, headcount: f64, months: f64, annual_rate: f64) -> f64 {
    headcount * (capacity_pct / 100.0) * (annual_rate * months / 12.0)
}

pub fn development_cost(integrations_per_year: f64, hours_per_integration: f64, hourly_rate: f64) -> f64 {
    integrations_per_year * hours_per_integration * hourly_rate
}

pub fn maintenance_cost(headcount: f64, capacity_pct: f64, annual_rate: f64) -> f64 {
    headcount * (capacity_pct / 100.0) * annual_rate
}

pub fn cost_per_integration(cost: f64, integration_count: u32) -> Result<f64, RoiError> {
    checked_divide(cost, f64::from(integration_count), "integration count")
}

/// Costs one category for both arms with the same formula.
pub fn compute_cost_category<P>(
    category: SavingsCategory,
    baseline: &P,
    improved: &P,
    formula: impl Fn(&P) -> f64,
) -> Result<CategoryCosts, RoiError> {
    let baseline_cost = ensure_finite(formula(baseline), category.label())?;
    let improved_cost = ensure_finite(formula(improved), category.label())?;
    Ok(CategoryCosts {
        category,
        baseline_cost,
        improved_cost,
        savings: baseline_cost - improved_cost,
    })
}

struct OnboardingParams {
    capacity_pct: f64,
    headcount: f64,
    months: f64,
}

struct DevelopmentParams {
    integrations_per_year: f64,
    hours_per_integration: f64,
}

struct MaintenanceParams {
    headcount: f64,
    capacity_pct: f64,
}

/// Validates `inputs` and computes the full set of outputs. Either every
/// figure is produced or an error is returned; there are no partial results.
pub fn calculate(inputs: &ScenarioInputs, config: &RoiConfig) -> Result<ScenarioOutputs, RoiError> {
    validate_scenario(inputs)?;

    let rate = ResolvedRate::resolve(inputs.general.developer_rate, inputs.general.rate_basis);
    let improved = ImprovedParameters::derive(
        inputs,
        &config.improvement,
        config.truncate_derived_counts,
    );
    percentage("improved.onboarding_capacity_pct", improved.onboarding_capacity_pct)?;
    percentage("improved.maintenance_capacity_pct", improved.maintenance_capacity_pct)?;
    let baseline = &inputs.baseline;
    debug!("resolved rate {rate:?}, improved parameters {improved:?}");

    let onboarding = compute_cost_category(
        SavingsCategory::Onboarding,
        &OnboardingParams {
            capacity_pct: baseline.onboarding_capacity_pct,
            headcount: f64::from(baseline.supporting_headcount),
            months: f64::from(baseline.months_to_onboard),
        },
        &OnboardingParams {
            capacity_pct: improved.onboarding_capacity_pct,
            headcount: improved.supporting_headcount,
            months: improved.months_to_onboard,
        },
        |p| onboarding_cost(p.capacity_pct, p.headcount, p.months, rate.annual),
    )?;

    let development = compute_cost_category(
        SavingsCategory::Development,
        &DevelopmentParams {
            integrations_per_year: f64::from(baseline.integrations_per_year),
            hours_per_integration: baseline.hours_per_integration,
        },
        &DevelopmentParams {
            integrations_per_year: f64::from(improved.integrations_per_year),
            hours_per_integration: improved.hours_per_integration,
        },
        |p| development_cost(p.integrations_per_year, p.hours_per_integration, rate.hourly),
    )?;

    let maintenance = compute_cost_category(
        SavingsCategory::Maintenance,
        &MaintenanceParams {
            headcount: f64::from(baseline.supporting_headcount),
            capacity_pct: baseline.maintenance_capacity_pct,
        },
        &MaintenanceParams {
            headcount: improved.supporting_headcount,
            capacity_pct: improved.maintenance_capacity_pct,
        },
        |p| maintenance_cost(p.headcount, p.capacity_pct, rate.annual),
    )?;

    let per_integration = PerIntegrationCosts {
        baseline_development: cost_per_integration(
            development.baseline_cost,
            baseline.integrations_per_year,
        )?,
        improved_development: cost_per_integration(
            development.improved_cost,
            improved.integrations_per_year,
        )?,
        baseline_maintenance: cost_per_integration(
            maintenance.baseline_cost,
            baseline.existing_integrations,
        )?,
        improved_maintenance: cost_per_integration(
            maintenance.improved_cost,
            improved.integrations_to_migrate,
        )?,
    };

    let categories = vec![onboarding, development, maintenance];
    let total_annual_savings = ensure_finite(
        categories.iter().map(|costs| costs.savings).sum(),
        "total annual savings",
    )?;
    let five_year_savings = total_annual_savings * PROJECTION_YEARS;
    debug!("total annual savings {total_annual_savings}, five year savings {five_year_savings}");

    Ok(ScenarioOutputs {
        rate,
        improved_parameters: improved,
        categories,
        per_integration,
        total_annual_savings,
        five_year_savings,
    })
}
