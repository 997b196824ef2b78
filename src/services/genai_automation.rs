use crate::domain::genai::{GenAiInputs, GenAiOutputs};
use crate::domain::outputs::PROJECTION_YEARS;
use crate::services::roi_error::{RoiError, checked_divide, ensure_finite};
use crate::services::validation::validate_genai;

pub fn calculate_genai(inputs: &GenAiInputs) -> Result<GenAiOutputs, RoiError> {
    validate_genai(inputs)?;

    let employees = f64::from(inputs.employees);
    let tasks = f64::from(inputs.tasks_per_year_per_employee);
    let reduction = inputs.reduction_pct / 100.0;

    let original_cost = ensure_finite(
        employees * inputs.hours_per_task * inputs.hourly_rate * tasks,
        "original cost",
    )?;
    let new_cost = original_cost * (1.0 - reduction);
    let savings = original_cost - new_cost;

    let total_hours = employees * inputs.hours_per_task * tasks;
    let total_hours_saved = total_hours * reduction;
    let hours_saved_per_employee = checked_divide(total_hours_saved, employees, "employee count")?;

    Ok(GenAiOutputs {
        original_cost,
        new_cost,
        savings,
        five_year_savings: savings * PROJECTION_YEARS,
        total_hours,
        total_hours_saved,
        hours_saved_per_employee,
        hours_saved_per_task: inputs.hours_per_task * reduction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_costs_and_hours_for_default_inputs() {
        let outputs = calculate_genai(&GenAiInputs::default()).unwrap();

        assert_eq!(outputs.original_cost, 450_000.0);
        assert_eq!(outputs.new_cost, 270_000.0);
        assert_eq!(outputs.savings, 180_000.0);
        assert_eq!(outputs.five_year_savings, 900_000.0);
        assert_eq!(outputs.total_hours, 10_000.0);
        assert_eq!(outputs.total_hours_saved, 4_000.0);
        assert_eq!(outputs.hours_saved_per_employee, 80.0);
        assert_eq!(outputs.hours_saved_per_task, 0.8);
    }

    #[test]
    fn full_reduction_saves_the_entire_cost() {
        let inputs = GenAiInputs {
            reduction_pct: 100.0,
            ..GenAiInputs::default()
        };
        let outputs = calculate_genai(&inputs).unwrap();
        assert_eq!(outputs.new_cost, 0.0);
        assert_eq!(outputs.savings, outputs.original_cost);
    }

    #[test]
    fn zero_employees_fails_with_division_by_zero() {
        let inputs = GenAiInputs {
            employees: 0,
            ..GenAiInputs::default()
        };
        let err = calculate_genai(&inputs).unwrap_err();
        assert_eq!(err, RoiError::division_by_zero("employee count"));
    }

    #[test]
    fn rejects_reduction_above_hundred_percent() {
        let inputs = GenAiInputs {
            reduction_pct: 140.0,
            ..GenAiInputs::default()
        };
        assert!(matches!(
            calculate_genai(&inputs),
            Err(RoiError::InvalidInput { .. })
        ));
    }
}
