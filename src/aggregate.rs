//! Success-rate aggregation for the pie chart.

use crate::chart::{ChartSpec, PieSlice};
use crate::dataset::Dataset;
use crate::selection::SiteSelection;

/// Aggregate launch successes into a pie `ChartSpec`.
///
/// With `SiteSelection::All` the pie has one slice per distinct site,
/// valued by that site's summed success count (sites with no successes
/// keep a zero-valued slice). With a single site the pie groups the
/// site's launches by outcome: exactly two slices labelled `"0"` and
/// `"1"` whose values sum to the site's row count.
///
/// A site name not present in the dataset yields a zero-slice pie.
/// That is defined behavior, not an error: the dropdown only offers
/// names derived from the dataset, so an unknown name can only come
/// from a caller bypassing the UI.
///
/// Pure function of its inputs; the dataset is never mutated.
pub fn success_pie(dataset: &Dataset, site: &SiteSelection) -> ChartSpec {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| r.site == *name && r.success)
                        .count() as u32,
                })
                .collect();
            ChartSpec::Pie {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let total = dataset.records().iter().filter(|r| r.site == *name).count() as u32;
            let successes = dataset
                .records()
                .iter()
                .filter(|r| r.site == *name && r.success)
                .count() as u32;

            // Unknown site: no rows, zero-slice pie.
            let slices = if total == 0 {
                vec![]
            } else {
                vec![
                    PieSlice {
                        label: "0".to_string(),
                        value: total - successes,
                    },
                    PieSlice {
                        label: "1".to_string(),
                        value: successes,
                    },
                ]
            };
            ChartSpec::Pie {
                title: format!("Total Success Launches for Site {name}"),
                slices,
            }
        }
    }
}
