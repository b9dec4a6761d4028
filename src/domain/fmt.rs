//! Pure value formatting for the grid.
//!
//! All formatting lives here so the rendering components only deal with
//! strings and styles. Statistics are truncated (not rounded) to 2 decimal
//! digits at this boundary; the raw values stay available on
//! [`crate::domain::stats::ColumnStatistic`] for consumers needing full
//! precision.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent cells and undefined statistics.
/// Never render the literal string "NaN".
pub const ABSENT: &str = "-";

/// Digit glyphs used when formatting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralStyle {
    #[default]
    Western,
    /// Eastern Arabic digits with the Arabic decimal separator and a trailing
    /// sign for negative values.
    EasternArabic,
}

/// Format a body cell value as a percentage with one decimal digit.
///
/// Absent values render as [`ABSENT`]. In the localized variant the sign is
/// written as a trailing `-` after the percent sign.
pub fn format_cell(value: Option<f64>, style: NumeralStyle) -> String {
    let Some(v) = value else {
        return ABSENT.to_string();
    };
    if v.is_nan() {
        return ABSENT.to_string();
    }

    match style {
        NumeralStyle::Western => format!("{v:.1}%"),
        NumeralStyle::EasternArabic => {
            let magnitude = to_eastern_arabic(&format!("{:.1}", v.abs()));
            if v < 0.0 {
                format!("{magnitude}%-")
            } else {
                format!("{magnitude}%")
            }
        }
    }
}

/// Format a summary statistic, truncated to 2 decimal digits.
///
/// The NaN sentinel (column with zero valid values) renders as an absent
/// cell.
pub fn format_statistic(value: f64, style: NumeralStyle) -> String {
    if value.is_nan() {
        return ABSENT.to_string();
    }
    let truncated = truncate_2(value);

    match style {
        NumeralStyle::Western => format!("{truncated:.2}%"),
        NumeralStyle::EasternArabic => {
            let magnitude = to_eastern_arabic(&format!("{:.2}", truncated.abs()));
            if truncated < 0.0 {
                format!("{magnitude}%-")
            } else {
                format!("{magnitude}%")
            }
        }
    }
}

/// Truncate toward zero to 2 decimal digits.
pub fn truncate_2(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Map ASCII digits and the decimal point to Eastern Arabic glyphs.
fn to_eastern_arabic(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c {
            '0' => '\u{0660}',
            '1' => '\u{0661}',
            '2' => '\u{0662}',
            '3' => '\u{0663}',
            '4' => '\u{0664}',
            '5' => '\u{0665}',
            '6' => '\u{0666}',
            '7' => '\u{0667}',
            '8' => '\u{0668}',
            '9' => '\u{0669}',
            '.' => '\u{066B}',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, "-")]
    #[case(Some(f64::NAN), "-")]
    #[case(Some(0.0), "0.0%")]
    #[case(Some(3.42), "3.4%")]
    #[case(Some(-3.42), "-3.4%")]
    #[case(Some(12.0), "12.0%")]
    fn test_format_cell_western(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_cell(value, NumeralStyle::Western), expected);
    }

    #[rstest]
    #[case(None, "-")]
    #[case(Some(3.4), "٣٫٤%")]
    #[case(Some(-3.4), "٣٫٤%-")]
    #[case(Some(12.5), "١٢٫٥%")]
    fn test_format_cell_eastern_arabic(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_cell(value, NumeralStyle::EasternArabic), expected);
    }

    #[test]
    fn test_truncate_not_round() {
        assert_eq!(truncate_2(1.999), 1.99);
        assert_eq!(truncate_2(-1.999), -1.99);
        assert_eq!(truncate_2(4.0), 4.0);
    }

    #[test]
    fn test_format_statistic() {
        assert_eq!(format_statistic(4.0, NumeralStyle::Western), "4.00%");
        // [2, 4, 6] population stddev = 1.632993... => truncated, not rounded
        assert_eq!(format_statistic(1.632993, NumeralStyle::Western), "1.63%");
        assert_eq!(format_statistic(-1.639, NumeralStyle::Western), "-1.63%");
    }

    #[test]
    fn test_format_statistic_nan_sentinel() {
        let rendered = format_statistic(f64::NAN, NumeralStyle::Western);
        assert_eq!(rendered, "-");
        assert!(!rendered.contains("NaN"));
    }

    #[test]
    fn test_format_statistic_eastern_arabic() {
        assert_eq!(
            format_statistic(-1.639, NumeralStyle::EasternArabic),
            "١٫٦٣%-"
        );
    }
}
