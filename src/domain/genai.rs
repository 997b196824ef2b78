use serde::Serialize;

/// Task automation scenario: how much of a repeated task a generative model removes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenAiInputs {
    pub employees: u32,
    pub hours_per_task: f64,
    pub hourly_rate: f64,
    pub tasks_per_year_per_employee: u32,
    pub reduction_pct: f64,
}

impl Default for GenAiInputs {
    fn default() -> Self {
        Self {
            employees: 50,
            hours_per_task: 2.0,
            hourly_rate: 45.0,
            tasks_per_year_per_employee: 100,
            reduction_pct: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenAiOutputs {
    pub original_cost: f64,
    pub new_cost: f64,
    pub savings: f64,
    pub five_year_savings: f64,
    pub total_hours: f64,
    pub total_hours_saved: f64,
    pub hours_saved_per_employee: f64,
    pub hours_saved_per_task: f64,
}
