//! Reference dataset of known medicine names.
//!
//! Loads a CSV catalogue (one row per medicine, required `name` column) into
//! an in-memory, read-only list used to validate names extracted from
//! prescription images. The list is loaded once at process start and shared
//! unchanged for the lifetime of the service.
//!
//! # Example
//!
//! ```rust,no_run
//! use rxverify_dataset::ReferenceDataset;
//!
//! fn main() -> Result<(), rxverify_dataset::DatasetError> {
//!     let dataset = ReferenceDataset::load("data/medicines.csv")?;
//!     println!("{} known medicines", dataset.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Column that must be present in the reference CSV.
pub const NAME_COLUMN: &str = "name";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read reference CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reference CSV must have a 'name' column")]
    MissingNameColumn,
}

/// Ordered, immutable list of known medicine names.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    names: Vec<String>,
}

impl ReferenceDataset {
    /// Load the dataset from a CSV file.
    ///
    /// Row order is preserved. A missing `name` column is a fatal
    /// configuration error; a dataset that is empty after the header is not.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;

        let name_idx = reader
            .headers()?
            .iter()
            .position(|header| header == NAME_COLUMN)
            .ok_or(DatasetError::MissingNameColumn)?;

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(name) = record.get(name_idx) {
                names.push(name.to_string());
            }
        }

        info!(path = %path.display(), count = names.len(), "Reference dataset loaded");
        Ok(Self { names })
    }

    /// Build a dataset from an already-materialized name list.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Known medicine names in file row order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
