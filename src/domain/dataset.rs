//! The fetched table of labeled rows/columns and numeric cells.
//!
//! A [`Dataset`] is created once per successful fetch and never mutated
//! afterwards; a new fetch replaces it wholesale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a response body does not decode into a valid dataset.
///
/// Shape violations are rejected here, at the load boundary, instead of
/// trusting the JSON structurally and failing deep inside rendering.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("response is not valid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset has {labels} row labels but {rows} data rows")]
    RowCountMismatch { labels: usize, rows: usize },

    #[error("data row {row} has {got} values, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        got: usize,
        expected: usize,
    },
}

/// A two-dimensional numeric dataset: category labels (columns), row labels
/// (typically year strings) and one value per (row, column) pair.
///
/// `None` entries are missing measurements; they render as absent and are
/// excluded from statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<String>,
    pub data: Vec<Vec<Option<f64>>>,
}

impl Dataset {
    /// Decode a JSON document into a validated dataset.
    ///
    /// Invariants checked: `data.len() == rows.len()` and every inner row has
    /// exactly `columns.len()` values.
    pub fn from_json(body: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(body)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Validate the row/column shape invariants.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.data.len() != self.rows.len() {
            return Err(DatasetError::RowCountMismatch {
                labels: self.rows.len(),
                rows: self.data.len(),
            });
        }
        for (row, values) in self.data.iter().enumerate() {
            if values.len() != self.columns.len() {
                return Err(DatasetError::RowWidthMismatch {
                    row,
                    got: values.len(),
                    expected: self.columns.len(),
                });
            }
        }
        Ok(())
    }

    /// Value at `(row, column)`, `None` when absent or out of range.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(column)).copied()?
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "columns": ["A", "B"],
            "rows": ["2020", "2021"],
            "data": [[1, null], [3, 5]]
        }"#
    }

    #[test]
    fn test_from_json_valid() {
        let dataset = Dataset::from_json(sample_json()).expect("valid dataset");

        assert_eq!(dataset.columns, vec!["A", "B"]);
        assert_eq!(dataset.rows, vec!["2020", "2021"]);
        assert_eq!(dataset.data, vec![vec![Some(1.0), None], vec![Some(3.0), Some(5.0)]]);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let result = Dataset::from_json("{not json");
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_wrong_value_type() {
        let body = r#"{"columns": ["A"], "rows": ["2020"], "data": [["x"]]}"#;
        let result = Dataset::from_json(body);
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_validate_row_count_mismatch() {
        let body = r#"{"columns": ["A"], "rows": ["2020", "2021"], "data": [[1]]}"#;
        let result = Dataset::from_json(body);
        assert!(matches!(
            result,
            Err(DatasetError::RowCountMismatch { labels: 2, rows: 1 })
        ));
    }

    #[test]
    fn test_validate_row_width_mismatch() {
        let body = r#"{"columns": ["A", "B"], "rows": ["2020"], "data": [[1]]}"#;
        let result = Dataset::from_json(body);
        assert!(matches!(
            result,
            Err(DatasetError::RowWidthMismatch {
                row: 0,
                got: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_value_lookup() {
        let dataset = Dataset::from_json(sample_json()).expect("valid dataset");

        assert_eq!(dataset.value(0, 0), Some(1.0));
        assert_eq!(dataset.value(0, 1), None); // absent measurement
        assert_eq!(dataset.value(1, 1), Some(5.0));
        assert_eq!(dataset.value(9, 0), None); // out of range
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.validate().is_ok());
    }
}
