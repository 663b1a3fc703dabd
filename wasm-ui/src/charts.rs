//! Presentation adapter: `ChartSpec` values to plotly plots.

use launchdash_rs::{ChartSpec, ScatterPoint};
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Pie, Plot, Scatter};

/// Element id of the pie chart host div.
pub const PIE_CHART_ID: &str = "success-pie-chart";
/// Element id of the scatter chart host div.
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Build a plotly `Plot` from a chart spec.
///
/// A pie spec becomes a single pie trace. A scatter spec becomes one
/// markers trace per booster version category so plotly assigns each
/// category its own color, with the x-axis pinned to the spec's range.
pub fn to_plot(spec: &ChartSpec) -> Plot {
    let mut plot = Plot::new();
    match spec {
        ChartSpec::Pie { title, slices } => {
            let values: Vec<u32> = slices.iter().map(|s| s.value).collect();
            let labels: Vec<String> = slices.iter().map(|s| s.label.clone()).collect();
            plot.add_trace(Pie::new(values).labels(labels));
            plot.set_layout(Layout::new().title(Title::with_text(title.as_str())));
        }
        ChartSpec::Scatter {
            title,
            x_range,
            points,
        } => {
            for (category, x, y) in group_by_category(points) {
                plot.add_trace(Scatter::new(x, y).mode(Mode::Markers).name(category.as_str()));
            }
            plot.set_layout(
                Layout::new().title(Title::with_text(title.as_str())).x_axis(
                    Axis::new()
                        .title(Title::with_text("Payload Mass (kg)"))
                        .range(vec![x_range.0, x_range.1]),
                ),
            );
        }
    }
    plot
}

/// Render a chart spec into the div with the given id.
pub async fn render(div_id: &str, spec: &ChartSpec) {
    let plot = to_plot(spec);
    crate::plotly_bindings::react(div_id, &plot).await;
}

/// Split scatter points into per-category (x, y) series, categories in
/// first-seen order.
fn group_by_category(points: &[ScatterPoint]) -> Vec<(String, Vec<f64>, Vec<u8>)> {
    let mut series: Vec<(String, Vec<f64>, Vec<u8>)> = Vec::new();
    for point in points {
        match series
            .iter_mut()
            .find(|(category, _, _)| *category == point.booster_version_category)
        {
            Some((_, x, y)) => {
                x.push(point.payload_mass_kg);
                y.push(point.success);
            }
            None => series.push((
                point.booster_version_category.clone(),
                vec![point.payload_mass_kg],
                vec![point.success],
            )),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(kg: f64, success: u8, category: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: kg,
            success,
            booster_version_category: category.to_string(),
        }
    }

    #[test]
    fn test_group_by_category_first_seen_order() {
        let points = vec![
            point(500.0, 1, "v1.0"),
            point(1500.0, 0, "FT"),
            point(2500.0, 1, "v1.0"),
        ];
        let series = group_by_category(&points);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "v1.0");
        assert_eq!(series[0].1, vec![500.0, 2500.0]);
        assert_eq!(series[0].2, vec![1, 1]);
        assert_eq!(series[1].0, "FT");
        assert_eq!(series[1].1, vec![1500.0]);
    }

    #[test]
    fn test_group_by_category_empty() {
        assert!(group_by_category(&[]).is_empty());
    }
}
