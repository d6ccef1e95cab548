//! Dataset Types Module
//! Ordered category mappings and the four-dataset bundle the dashboard renders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset '{dataset}' has a negative value for '{label}': {value}")]
    NegativeValue {
        dataset: String,
        label: String,
        value: f64,
    },
    #[error("dataset '{dataset}' has a non-finite value for '{label}'")]
    NonFiniteValue { dataset: String, label: String },
}

/// Ordered label -> numeric measurement mapping for one aggregated dataset.
///
/// Insertion order is the render order; JSON object order is preserved on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMapping(IndexMap<String, f64>);

impl CategoryMapping {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        self.0.insert(label.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in mapping order.
    pub fn labels(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Values in mapping order.
    pub fn values(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Check that every value is finite and non-negative.
    pub fn validate(&self, dataset: &str) -> Result<(), DatasetError> {
        for (label, &value) in &self.0 {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteValue {
                    dataset: dataset.to_string(),
                    label: label.clone(),
                });
            }
            if value < 0.0 {
                return Err(DatasetError::NegativeValue {
                    dataset: dataset.to_string(),
                    label: label.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for CategoryMapping {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for CategoryMapping {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

/// The four pre-aggregated datasets the dashboard renders.
///
/// All four keys must be present in the input document; empty mappings are valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetBundle {
    pub skills: CategoryMapping,
    pub salary_by_region: CategoryMapping,
    pub seniority: CategoryMapping,
    pub responsibilities: CategoryMapping,
}

impl DatasetBundle {
    /// Validate every mapping in the bundle.
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.skills.validate("skills")?;
        self.salary_by_region.validate("salary_by_region")?;
        self.seniority.validate("seniority")?;
        self.responsibilities.validate("responsibilities")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_preserves_insertion_order() {
        let mut mapping = CategoryMapping::new();
        mapping.insert("Python", 10.0);
        mapping.insert("SQL", 7.0);
        mapping.insert("Excel", 3.0);

        assert_eq!(mapping.labels(), vec!["Python", "SQL", "Excel"]);
        assert_eq!(mapping.values(), vec![10.0, 7.0, 3.0]);
    }

    #[test]
    fn validate_rejects_negative_values() {
        let mapping: CategoryMapping = [("Moscow", 120000.0), ("Kazan", -1.0)]
            .into_iter()
            .collect();

        let err = mapping
            .validate("salary_by_region")
            .expect_err("negative value must be rejected");
        assert!(matches!(err, DatasetError::NegativeValue { .. }));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mapping: CategoryMapping = [("Junior", f64::NAN)].into_iter().collect();

        let err = mapping
            .validate("seniority")
            .expect_err("NaN must be rejected");
        assert!(matches!(err, DatasetError::NonFiniteValue { .. }));
    }

    #[test]
    fn empty_mapping_is_valid() {
        let mapping = CategoryMapping::new();
        assert!(mapping.validate("skills").is_ok());
        assert!(mapping.is_empty());
    }
}
