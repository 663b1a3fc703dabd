//! Chart specifications: what to draw, independent of the renderer.
//!
//! A `ChartSpec` is a plain value object produced fresh by each
//! transform call. The wasm UI maps it onto plotly traces; the CLI
//! prints it as text or JSON. Nothing here knows about either.

use serde::Serialize;

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Slice label (a site name, or a success category `"0"`/`"1"`).
    pub label: String,
    /// Slice value (a launch count).
    pub value: u32,
}

/// One point of the payload/success scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// X coordinate: payload mass in kg.
    pub payload_mass_kg: f64,
    /// Y coordinate: success flag, 0 or 1.
    pub success: u8,
    /// Color grouping key.
    pub booster_version_category: String,
}

/// An abstract chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Pie of launch counts. Zero slices is a valid empty chart.
    Pie { title: String, slices: Vec<PieSlice> },
    /// Payload vs. success scatter. The x-axis bounds echo the
    /// requested payload range even when no point reaches them.
    Scatter {
        title: String,
        x_range: (f64, f64),
        points: Vec<ScatterPoint>,
    },
}

impl ChartSpec {
    /// The chart title.
    pub fn title(&self) -> &str {
        match self {
            Self::Pie { title, .. } => title,
            Self::Scatter { title, .. } => title,
        }
    }

    /// True when the chart has no data to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Pie { slices, .. } => slices.is_empty(),
            Self::Scatter { points, .. } => points.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_is_empty() {
        let pie = ChartSpec::Pie {
            title: "counts".to_string(),
            slices: vec![],
        };
        assert_eq!(pie.title(), "counts");
        assert!(pie.is_empty());

        let scatter = ChartSpec::Scatter {
            title: "payload".to_string(),
            x_range: (0.0, 10000.0),
            points: vec![ScatterPoint {
                payload_mass_kg: 500.0,
                success: 1,
                booster_version_category: "FT".to_string(),
            }],
        };
        assert!(!scatter.is_empty());
    }

    #[test]
    fn test_serialize_tagged_by_kind() {
        let pie = ChartSpec::Pie {
            title: "t".to_string(),
            slices: vec![PieSlice {
                label: "A".to_string(),
                value: 2,
            }],
        };
        let json = serde_json::to_value(&pie).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"][0]["label"], "A");
        assert_eq!(json["slices"][0]["value"], 2);
    }
}
