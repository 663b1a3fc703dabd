//! Error type for dataset loading.

use thiserror::Error;

/// Errors raised while loading the launch dataset.
///
/// Loading is the only fallible operation in the library; the chart
/// transforms are total over a loaded dataset. A load failure is fatal
/// at startup by design.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading the CSV source failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV could not be parsed into launch records.
    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV parsed but contained no rows. Payload bounds and the
    /// site list would be undefined.
    #[error("dataset contains no launch records")]
    Empty,
}
