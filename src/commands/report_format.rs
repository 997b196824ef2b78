use crate::domain::genai::GenAiOutputs;
use crate::domain::outputs::{CategoryCosts, ScenarioOutputs};
use crate::domain::underwriting::UnderwritingOutputs;
use crate::services::currency::format_currency;

pub fn format_roi_report(outputs: &ScenarioOutputs, symbol: &str) -> String {
    let money = |amount: f64| format_currency(amount, symbol);

    let mut lines = Vec::new();
    lines.push("ROI Report".to_string());
    lines.push(format!(
        "Total annual cost savings: {}",
        money(outputs.total_annual_savings)
    ));
    lines.push(format!("Five year savings: {}", money(outputs.five_year_savings)));
    lines.push(format!(
        "Developer rate: {} per hour, {} per year",
        money(outputs.rate.hourly),
        money(outputs.rate.annual)
    ));
    lines.push(String::new());
    lines.push("Savings Breakdown:".to_string());
    lines.push("Category | Without | With | Savings".to_string());
    lines.push("---------|---------|------|--------".to_string());
    for costs in &outputs.categories {
        lines.push(format_category_row(costs, symbol));
    }
    lines.push(format!(
        "Total | {} | {} | {}",
        money(outputs.total_baseline_cost()),
        money(outputs.total_improved_cost()),
        money(outputs.total_annual_savings)
    ));
    lines.push(String::new());
    lines.push("Cost per integration:".to_string());
    lines.push("Activity | Without | With".to_string());
    lines.push("---------|---------|-----".to_string());
    let per_integration = &outputs.per_integration;
    lines.push(format!(
        "Development | {} | {}",
        money(per_integration.baseline_development),
        money(per_integration.improved_development)
    ));
    lines.push(format!(
        "Maintenance | {} | {}",
        money(per_integration.baseline_maintenance),
        money(per_integration.improved_maintenance)
    ));

    lines.join("\n")
}

fn format_category_row(costs: &CategoryCosts, symbol: &str) -> String {
    format!(
        "{label} | {without} | {with} | {savings}",
        label = costs.category.label(),
        without = format_currency(costs.baseline_cost, symbol),
        with = format_currency(costs.improved_cost, symbol),
        savings = format_currency(costs.savings, symbol)
    )
}

pub fn format_genai_report(outputs: &GenAiOutputs, symbol: &str) -> String {
    let lines = [
        "Generative AI Automation Report".to_string(),
        format!("Annual savings: {}", format_currency(outputs.savings, symbol)),
        format!("Five year savings: {}", format_currency(outputs.five_year_savings, symbol)),
        format!("Original cost: {}", format_currency(outputs.original_cost, symbol)),
        format!("Cost with automation: {}", format_currency(outputs.new_cost, symbol)),
        format!(
            "Hours saved: {:.1} of {:.1}",
            outputs.total_hours_saved, outputs.total_hours
        ),
        format!("Hours saved per employee: {:.1}", outputs.hours_saved_per_employee),
        format!("Hours saved per task: {:.2}", outputs.hours_saved_per_task),
    ];
    lines.join("\n")
}

pub fn format_underwriting_report(outputs: &UnderwritingOutputs, symbol: &str) -> String {
    let lines = [
        "Underwriting Capacity Report".to_string(),
        format!(
            "Annual revenue increase: {}",
            format_currency(outputs.revenue_increase, symbol)
        ),
        format!(
            "Five year revenue increase: {}",
            format_currency(outputs.five_year_revenue_increase, symbol)
        ),
        format!("Currently underwritten: {:.0}", outputs.current_underwritten),
        format!("Additional capacity: {:.0}", outputs.additional_capacity),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::genai::GenAiInputs;
    use crate::domain::scenario::ScenarioInputs;
    use crate::domain::underwriting::UnderwritingInputs;
    use crate::services::config_yaml::RoiConfig;
    use crate::services::genai_automation::calculate_genai;
    use crate::services::roi_engine::calculate;
    use crate::services::underwriting::calculate_underwriting;

    #[test]
    fn format_roi_report_includes_totals_and_breakdown() {
        let outputs = calculate(&ScenarioInputs::default(), &RoiConfig::default()).unwrap();
        let report = format_roi_report(&outputs, "$");

        assert!(report.contains("ROI Report"));
        assert!(report.contains("Total annual cost savings: $843,840"));
        assert!(report.contains("Five year savings: $4,219,200"));
        assert!(report.contains("Developer rate: $45 per hour, $93,600 per year"));
        assert!(report.contains("Category | Without | With | Savings"));
        assert!(report.contains("Time to Value | $374,400 | $9,360 | $365,040"));
        assert!(report.contains("Development | $90,000 | $9,000 | $81,000"));
        assert!(report.contains("Maintenance | $468,000 | $70,200 | $397,800"));
        assert!(report.contains("Total | $932,400 | $88,560 | $843,840"));
        assert!(report.contains("Development | $9,000 | $900"));
        assert!(report.contains("Maintenance | $23,400 | $3,510"));
    }

    #[test]
    fn format_roi_report_uses_configured_symbol() {
        let outputs = calculate(&ScenarioInputs::default(), &RoiConfig::default()).unwrap();
        let report = format_roi_report(&outputs, "£");
        assert!(report.contains("Total annual cost savings: £843,840"));
    }

    #[test]
    fn format_genai_report_lists_savings_and_hours() {
        let outputs = calculate_genai(&GenAiInputs::default()).unwrap();
        let report = format_genai_report(&outputs, "$");

        assert!(report.contains("Annual savings: $180,000"));
        assert!(report.contains("Hours saved: 4000.0 of 10000.0"));
        assert!(report.contains("Hours saved per employee: 80.0"));
        assert!(report.contains("Hours saved per task: 0.80"));
    }

    #[test]
    fn format_underwriting_report_lists_revenue() {
        let outputs = calculate_underwriting(&UnderwritingInputs::default()).unwrap();
        let report = format_underwriting_report(&outputs, "$");

        assert!(report.contains("Annual revenue increase: $1,800,000"));
        assert!(report.contains("Five year revenue increase: $9,000,000"));
        assert!(report.contains("Additional capacity: 1500"));
    }
}
