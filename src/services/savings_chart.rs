use plotters::prelude::*;
use thiserror::Error;

use crate::domain::outputs::{SavingsCategory, ScenarioOutputs};

#[derive(Error, Debug)]
pub enum SavingsChartError {
    #[error("failed to render cost comparison chart: {0}")]
    Render(String),
}

const ARM_LABELS: [&str; 2] = ["Without product", "With product"];

fn arm_label(value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|idx| ARM_LABELS.get(idx))
            .map(|label| label.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Left and right edges of the segment holding arm `idx`.
fn arm_segment(idx: usize) -> (SegmentValue<i32>, SegmentValue<i32>) {
    let left = SegmentValue::Exact(idx as i32);
    let right = if idx + 1 < ARM_LABELS.len() {
        SegmentValue::Exact(idx as i32 + 1)
    } else {
        SegmentValue::Last
    };
    (left, right)
}

fn category_color(category: SavingsCategory) -> RGBColor {
    match category {
        SavingsCategory::Onboarding => RGBColor(0, 119, 190),
        SavingsCategory::Maintenance => RGBColor(0, 168, 232),
        SavingsCategory::Development => RGBColor(247, 147, 30),
    }
}

/// Renders a stacked bar per arm, one segment per cost category.
pub fn write_savings_chart_png(
    output_path: &str,
    outputs: &ScenarioOutputs,
) -> Result<(), SavingsChartError> {
    let tallest = outputs
        .total_baseline_cost()
        .max(outputs.total_improved_cost());
    let max_y = if tallest > 0.0 { tallest * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| SavingsChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Cost Comparison: Without vs With", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d((0..1).into_segmented(), 0.0..max_y)
        .map_err(|e| SavingsChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_desc("Annual cost")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(2)
        .x_label_formatter(&arm_label)
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| SavingsChartError::Render(e.to_string()))?;

    let mut stack_tops = [0.0f64; 2];
    for costs in &outputs.categories {
        let color = category_color(costs.category);
        let style = ShapeStyle::from(&color).filled();
        let segments = [costs.baseline_cost, costs.improved_cost];

        let bars: Vec<_> = segments
            .iter()
            .enumerate()
            .map(|(idx, cost)| {
                let bottom = stack_tops[idx];
                stack_tops[idx] += cost;
                let (left, right) = arm_segment(idx);
                Rectangle::new([(left, bottom), (right, bottom + cost)], style)
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(|e| SavingsChartError::Render(e.to_string()))?
            .label(format!("{} cost", costs.category.label()))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| SavingsChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| SavingsChartError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioInputs;
    use crate::services::config_yaml::RoiConfig;
    use crate::services::roi_engine::calculate;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn arm_labels_are_placed_at_segment_centres() {
        assert_eq!(arm_label(&SegmentValue::CenterOf(0)), "Without product");
        assert_eq!(arm_label(&SegmentValue::CenterOf(1)), "With product");
        assert_eq!(arm_label(&SegmentValue::Exact(0)), "");
        assert_eq!(arm_label(&SegmentValue::Last), "");
    }

    #[test]
    fn last_arm_extends_to_end_of_axis() {
        assert!(matches!(
            arm_segment(0),
            (SegmentValue::Exact(0), SegmentValue::Exact(1))
        ));
        assert!(matches!(
            arm_segment(1),
            (SegmentValue::Exact(1), SegmentValue::Last)
        ));
    }

    #[test]
    fn write_savings_chart_png_creates_file() {
        let outputs = calculate(&ScenarioInputs::default(), &RoiConfig::default()).unwrap();
        let output_file = assert_fs::NamedTempFile::new("chart.png").unwrap();

        write_savings_chart_png(output_file.path().to_str().unwrap(), &outputs).unwrap();

        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_savings_chart_png_handles_all_zero_costs() {
        let mut inputs = ScenarioInputs::default();
        inputs.general.developer_rate = 0.0;
        let outputs = calculate(&inputs, &RoiConfig::default()).unwrap();
        let output_file = assert_fs::NamedTempFile::new("zero.png").unwrap();

        write_savings_chart_png(output_file.path().to_str().unwrap(), &outputs).unwrap();
        output_file.assert(predicate::path::exists());
    }
}
