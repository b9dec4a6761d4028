//! Color and style mapping.
//!
//! Maps the symbolic [`ColorBucket`] levels and the derived
//! [`CellHighlight`] onto concrete ratatui styles. Positive buckets walk a
//! green ramp, negative buckets a red ramp; level 1 is lightest, level 5
//! darkest.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{color::ColorBucket, hover::CellHighlight};

/// Green ramp for positive buckets, level 1..=5.
const POSITIVE: [Color; 5] = [
    Color::Rgb(199, 233, 192),
    Color::Rgb(161, 217, 155),
    Color::Rgb(116, 196, 118),
    Color::Rgb(49, 163, 84),
    Color::Rgb(0, 109, 44),
];

/// Red ramp for negative buckets, level 1..=5.
const NEGATIVE: [Color; 5] = [
    Color::Rgb(252, 187, 161),
    Color::Rgb(252, 146, 114),
    Color::Rgb(251, 106, 74),
    Color::Rgb(222, 45, 38),
    Color::Rgb(165, 15, 21),
];

const HOVER_BG: Color = Color::Rgb(58, 58, 58);

/// Foreground color for a bucket.
pub fn bucket_color(bucket: ColorBucket) -> Color {
    match bucket {
        ColorBucket::Neutral => Color::Gray,
        ColorBucket::Positive(level) => POSITIVE[ramp_index(level)],
        ColorBucket::Negative(level) => NEGATIVE[ramp_index(level)],
    }
}

fn ramp_index(level: u8) -> usize {
    usize::from(level.clamp(1, 5)) - 1
}

/// Base style of a body cell given its bucket.
pub fn cell_style(bucket: ColorBucket) -> Style {
    Style::default().fg(bucket_color(bucket))
}

/// Adjust a cell style for the current highlight state.
pub fn apply_highlight(style: Style, highlight: CellHighlight) -> Style {
    match highlight {
        CellHighlight::Normal => style,
        CellHighlight::Dimmed => style.add_modifier(Modifier::DIM),
        CellHighlight::Full => style.bg(HOVER_BG).add_modifier(Modifier::BOLD),
    }
}

/// Column header style; hovered headers get the hover background.
pub fn header_style(hovered: bool) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if hovered {
        style.bg(HOVER_BG)
    } else {
        style
    }
}

/// Row label style; hovered labels get the hover background.
pub fn label_style(hovered: bool) -> Style {
    let style = Style::default().fg(Color::White);
    if hovered {
        style.bg(HOVER_BG).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Style of the mean/stddev summary row labels and values.
pub fn summary_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style of the loading placeholder.
pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_colors_distinct_per_level() {
        let positive: Vec<Color> = (1..=5).map(|l| bucket_color(ColorBucket::Positive(l))).collect();
        let negative: Vec<Color> = (1..=5).map(|l| bucket_color(ColorBucket::Negative(l))).collect();

        for window in positive.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        for window in negative.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        assert_eq!(bucket_color(ColorBucket::Neutral), Color::Gray);
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        assert_eq!(
            bucket_color(ColorBucket::Positive(0)),
            bucket_color(ColorBucket::Positive(1))
        );
        assert_eq!(
            bucket_color(ColorBucket::Negative(9)),
            bucket_color(ColorBucket::Negative(5))
        );
    }

    #[test]
    fn test_highlight_adjustments() {
        let base = cell_style(ColorBucket::Positive(3));

        assert_eq!(apply_highlight(base, CellHighlight::Normal), base);
        assert!(apply_highlight(base, CellHighlight::Dimmed)
            .add_modifier
            .contains(Modifier::DIM));
        assert_eq!(
            apply_highlight(base, CellHighlight::Full).bg,
            Some(HOVER_BG)
        );
    }
}
