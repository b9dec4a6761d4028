//! Magnitude-to-bucket classification.
//!
//! The mapping from a numeric value to one of 11 symbolic intensity buckets.
//! Picking the concrete terminal color for a bucket belongs to
//! [`crate::presentation::theme`]; this module stays presentation-agnostic.

use serde::{Deserialize, Serialize};

/// Discrete visual-intensity classification of a cell value.
///
/// Five positive and five negative levels (1 = lightest, 5 = darkest) plus a
/// neutral bucket for zero, absent and non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBucket {
    Neutral,
    Positive(u8),
    Negative(u8),
}

impl ColorBucket {
    /// Intensity level 1..=5, or 0 for neutral.
    pub fn level(&self) -> u8 {
        match self {
            Self::Neutral => 0,
            Self::Positive(level) | Self::Negative(level) => *level,
        }
    }
}

/// Classify a cell value into its color bucket.
///
/// Total function: absent, zero and NaN all map to neutral. Boundaries are
/// closed toward zero, so a value exactly at a threshold belongs to the
/// lower-intensity bucket: `classify(Some(2.0))` is `Positive(1)` and
/// `classify(Some(-8.0))` is `Negative(4)`.
pub fn classify(value: Option<f64>) -> ColorBucket {
    let Some(v) = value else {
        return ColorBucket::Neutral;
    };
    if v.is_nan() || v == 0.0 {
        return ColorBucket::Neutral;
    }

    if v > 0.0 {
        let level = if v <= 2.0 {
            1
        } else if v <= 4.0 {
            2
        } else if v <= 6.0 {
            3
        } else if v <= 8.0 {
            4
        } else {
            5
        };
        ColorBucket::Positive(level)
    } else {
        let level = if v >= -2.0 {
            1
        } else if v >= -4.0 {
            2
        } else if v >= -6.0 {
            3
        } else if v >= -8.0 {
            4
        } else {
            5
        };
        ColorBucket::Negative(level)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, ColorBucket::Neutral)]
    #[case(Some(0.0), ColorBucket::Neutral)]
    #[case(Some(-0.0), ColorBucket::Neutral)]
    #[case(Some(f64::NAN), ColorBucket::Neutral)]
    #[case(Some(0.5), ColorBucket::Positive(1))]
    #[case(Some(2.0), ColorBucket::Positive(1))]
    #[case(Some(2.0001), ColorBucket::Positive(2))]
    #[case(Some(4.0), ColorBucket::Positive(2))]
    #[case(Some(4.0001), ColorBucket::Positive(3))]
    #[case(Some(6.0), ColorBucket::Positive(3))]
    #[case(Some(6.0001), ColorBucket::Positive(4))]
    #[case(Some(8.0), ColorBucket::Positive(4))]
    #[case(Some(8.0001), ColorBucket::Positive(5))]
    #[case(Some(100.0), ColorBucket::Positive(5))]
    #[case(Some(-0.5), ColorBucket::Negative(1))]
    #[case(Some(-2.0), ColorBucket::Negative(1))]
    #[case(Some(-2.0001), ColorBucket::Negative(2))]
    #[case(Some(-4.0), ColorBucket::Negative(2))]
    #[case(Some(-4.0001), ColorBucket::Negative(3))]
    #[case(Some(-6.0), ColorBucket::Negative(3))]
    #[case(Some(-6.0001), ColorBucket::Negative(4))]
    #[case(Some(-8.0), ColorBucket::Negative(4))]
    #[case(Some(-8.0001), ColorBucket::Negative(5))]
    #[case(Some(-100.0), ColorBucket::Negative(5))]
    fn test_classify_boundaries(#[case] value: Option<f64>, #[case] expected: ColorBucket) {
        assert_eq!(classify(value), expected);
    }

    #[test]
    fn test_level_accessor() {
        assert_eq!(ColorBucket::Neutral.level(), 0);
        assert_eq!(ColorBucket::Positive(3).level(), 3);
        assert_eq!(ColorBucket::Negative(5).level(), 5);
    }
}
