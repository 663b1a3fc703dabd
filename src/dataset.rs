//! The loaded launch dataset and its derived metadata.

use std::path::Path;

use crate::LaunchRecord;
use crate::error::DatasetError;

/// The full, immutable table of launch records.
///
/// Loaded once at startup and shared read-only for the lifetime of the
/// process. Distinct site names and the observed payload bounds are
/// computed at construction so callers never rescan the table for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl Dataset {
    /// Build a dataset from CSV text already in memory.
    ///
    /// This is the constructor used by the web app after fetching the
    /// remote CSV. An input with no data rows is an error: the derived
    /// metadata would be undefined.
    pub fn from_csv_str(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: LaunchRecord = row?;
            records.push(record);
        }
        Self::from_records(records)
    }

    /// Build a dataset from a CSV file on disk (CLI path).
    pub fn from_csv_path(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        // Distinct sites in first-seen order, matching the source table.
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
        }

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// All launch records, in source order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch site names, in first-seen order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed (min, max) payload mass across the whole dataset.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records. Construction rejects
    /// empty input, so this is always false for a loaded dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
