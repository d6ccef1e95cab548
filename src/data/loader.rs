//! Dataset Loader Module
//! Reads the four aggregated datasets from a JSON document.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::dataset::{DatasetBundle, DatasetError};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse datasets: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

/// Loads and validates the dataset bundle produced by the aggregation stage.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a `DatasetBundle` from a JSON file.
    ///
    /// The document must be an object with the keys `skills`,
    /// `salary_by_region`, `seniority` and `responsibilities`, each mapping
    /// labels to non-negative numbers. Object key order is preserved.
    pub fn load_json(path: &Path) -> Result<DatasetBundle, LoaderError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a `DatasetBundle` from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<DatasetBundle, LoaderError> {
        let bundle: DatasetBundle = serde_json::from_str(raw)?;
        bundle.validate()?;
        Ok(bundle)
    }
}
