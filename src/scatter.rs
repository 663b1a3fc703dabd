//! Payload/success correlation filter for the scatter plot.

use crate::chart::{ChartSpec, ScatterPoint};
use crate::dataset::Dataset;
use crate::selection::{PayloadRange, SiteSelection};

/// Filter the dataset into a scatter `ChartSpec`.
///
/// Keeps the rows whose payload mass falls inside `range` (inclusive)
/// and, unless `site` is `All`, whose site matches exactly. Each
/// surviving row becomes one point: x = payload mass, y = success flag
/// (0/1), colored by booster version category.
///
/// The spec's x-axis bounds echo `range` exactly even when no point
/// reaches them, so the rendered axis stays pinned to the slider. An
/// empty result (degenerate range, unknown site, or no rows in range)
/// is a valid zero-point chart.
///
/// Pure function of its inputs.
pub fn payload_scatter(dataset: &Dataset, site: &SiteSelection, range: PayloadRange) -> ChartSpec {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && site.matches(r))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            success: r.class(),
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for Site {name}")
        }
    };

    ChartSpec::Scatter {
        title,
        x_range: (range.min, range.max),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let text = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,500,v1.0,1
A,1500,v1.1,0
B,9000,FT,1
";
        Dataset::from_csv_str(text).unwrap()
    }

    fn points(spec: ChartSpec) -> Vec<ScatterPoint> {
        match spec {
            ChartSpec::Scatter { points, .. } => points,
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_range_filter_inclusive() {
        let dataset = sample_dataset();
        let spec = payload_scatter(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        let pts = points(spec);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].payload_mass_kg, 500.0);
        assert_eq!(pts[0].success, 1);
        assert_eq!(pts[0].booster_version_category, "v1.0");
    }

    #[test]
    fn test_full_range_keeps_every_row() {
        let dataset = sample_dataset();
        let (min, max) = dataset.payload_bounds();
        let spec = payload_scatter(&dataset, &SiteSelection::All, PayloadRange::new(min, max));
        assert_eq!(points(spec).len(), dataset.len());
    }

    #[test]
    fn test_site_filter_applied_after_range() {
        let dataset = sample_dataset();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::Site("A".to_string()),
            PayloadRange::new(0.0, 10000.0),
        );
        let pts = points(spec);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().all(|p| p.payload_mass_kg < 9000.0));
    }

    #[test]
    fn test_degenerate_range_is_empty() {
        let dataset = sample_dataset();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(5000.0, 1000.0),
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn test_x_range_echoes_request() {
        let dataset = sample_dataset();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::All,
            PayloadRange::new(3000.0, 4000.0),
        );
        match spec {
            ChartSpec::Scatter { x_range, points, .. } => {
                assert_eq!(x_range, (3000.0, 4000.0));
                assert!(points.is_empty());
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_titles() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(0.0, 10000.0);
        let all = payload_scatter(&dataset, &SiteSelection::All, range);
        assert_eq!(
            all.title(),
            "Correlation between Payload and Success for All Sites"
        );
        let one = payload_scatter(&dataset, &SiteSelection::Site("B".to_string()), range);
        assert_eq!(
            one.title(),
            "Correlation between Payload and Success for Site B"
        );
    }

    #[test]
    fn test_unknown_site_is_empty_not_error() {
        let dataset = sample_dataset();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::Site("NOWHERE".to_string()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let dataset = sample_dataset();
        let site = SiteSelection::All;
        let range = PayloadRange::new(0.0, 10000.0);
        assert_eq!(
            payload_scatter(&dataset, &site, range),
            payload_scatter(&dataset, &site, range)
        );
    }
}
