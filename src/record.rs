//! A single launch record from the source CSV.

use serde::{Deserialize, Deserializer};

/// One row of the launch dataset.
///
/// Deserialized directly from the source CSV schema; columns not named
/// here are ignored by the reader. Records are never mutated after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name, e.g. `CCAFS LC-40`.
    #[serde(rename = "Launch Site")]
    pub site: String,

    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Booster version category, e.g. `v1.0`, `FT`.
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,

    /// Launch outcome: `true` for success. Stored as 0/1 in the CSV
    /// `class` column.
    #[serde(rename = "class", deserialize_with = "flag_from_int")]
    pub success: bool,
}

impl LaunchRecord {
    /// The success flag as the 0/1 value used for chart axes and
    /// category labels.
    pub fn class(&self) -> u8 {
        u8::from(self.success)
    }
}

/// Deserialize the `class` column, accepting only 0 or 1.
fn flag_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid success flag {other}, expected 0 or 1"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(csv_text: &str) -> Result<LaunchRecord, csv::Error> {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        reader.deserialize().next().expect("expected one row")
    }

    #[test]
    fn test_deserialize_record() {
        let text = "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
                    CCAFS LC-40,2500.5,v1.0,1\n";
        let record = read_one(text).unwrap();
        assert_eq!(record.site, "CCAFS LC-40");
        assert_eq!(record.payload_mass_kg, 2500.5);
        assert_eq!(record.booster_version_category, "v1.0");
        assert!(record.success);
        assert_eq!(record.class(), 1);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let text = "Unnamed: 0,Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class\n\
                    0,1,KSC LC-39A,600,v1.1,0\n";
        let record = read_one(text).unwrap();
        assert_eq!(record.site, "KSC LC-39A");
        assert!(!record.success);
        assert_eq!(record.class(), 0);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let text = "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
                    CCAFS LC-40,100,v1.0,2\n";
        assert!(read_one(text).is_err());
    }
}
