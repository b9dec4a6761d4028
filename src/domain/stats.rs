//! Per-column summary statistics.
//!
//! Statistics are recomputed wholesale whenever the dataset changes; the raw
//! `f64` values are kept unrounded here and only truncated for display by
//! [`crate::domain::fmt`].

use derive_deref::Deref;

use crate::domain::dataset::Dataset;

/// Mean and population standard deviation of one column, computed over the
/// non-absent values only.
///
/// Both fields are `f64::NAN` when the column has no valid values; callers
/// must render the sentinel as an absent cell and never feed it into further
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistic {
    pub mean: f64,
    pub std_dev: f64,
}

impl ColumnStatistic {
    /// Whether the column had no valid values.
    pub fn is_undefined(&self) -> bool {
        self.mean.is_nan()
    }
}

/// Statistics for every column of a dataset, in column order.
#[derive(Debug, Clone, PartialEq, Default, Deref)]
pub struct ColumnStats(Vec<ColumnStatistic>);

/// Compute mean and population standard deviation per column.
///
/// Population variance: divide by the count of valid values, no Bessel
/// correction. Pure and deterministic; a column with zero valid values yields
/// the NaN sentinel (division by zero).
pub fn compute_column_statistics(dataset: &Dataset) -> ColumnStats {
    let stats = (0..dataset.column_count())
        .map(|column| {
            let values: Vec<f64> = dataset
                .data
                .iter()
                .filter_map(|row| row.get(column).copied().flatten())
                .collect();

            let count = values.len() as f64;
            let mean = values.iter().sum::<f64>() / count;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

            ColumnStatistic {
                mean,
                std_dev: variance.sqrt(),
            }
        })
        .collect();

    ColumnStats(stats)
}
