//! # launchdash-rs
//!
//! Core library for a SpaceX launch records dashboard.
//!
//! The dashboard itself is a thin UI: a site dropdown, a payload range
//! control, and two charts. Everything that is actually logic lives
//! here as two pure transforms over an immutable dataset:
//!
//! - [`success_pie`]: launch-success counts, grouped by site (all
//!   sites) or by outcome (one site), as a pie chart spec.
//! - [`payload_scatter`]: payload mass vs. success for the rows inside
//!   a payload range and site selection, as a scatter chart spec.
//!
//! Both take the [`Dataset`] (loaded once at startup, read-only
//! thereafter) and the current [`SiteSelection`] / [`PayloadRange`] and
//! return a fresh [`ChartSpec`]. There is no hidden state: identical
//! inputs yield identical specs.
//!
//! ## Example
//!
//! ```
//! use launchdash_rs::{Dataset, PayloadRange, SiteSelection, payload_scatter, success_pie};
//!
//! let csv = "\
//! Launch Site,Payload Mass (kg),Booster Version Category,class
//! CCAFS LC-40,500,v1.0,1
//! VAFB SLC-4E,1500,v1.1,0
//! CCAFS LC-40,9000,FT,1
//! ";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//!
//! let pie = success_pie(&dataset, &SiteSelection::All);
//! assert_eq!(pie.title(), "Total Success Launches by Site");
//!
//! let scatter = payload_scatter(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
//! assert!(!scatter.is_empty());
//! ```

pub mod aggregate;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod record;
pub mod scatter;
pub mod selection;

pub use aggregate::success_pie;
pub use chart::{ChartSpec, PieSlice, ScatterPoint};
pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::LaunchRecord;
pub use scatter::payload_scatter;
pub use selection::{ALL_SITES, PayloadRange, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, SiteSelection};
