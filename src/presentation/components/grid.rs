//! Grid component
//!
//! Renders the dataset as a table: a corner cell plus one header per column,
//! one body row per dataset row, and two summary rows (mean and population
//! standard deviation). While the fetch is unresolved (or has failed) the
//! area shows a loading placeholder instead.
//!
//! The component also owns the grid geometry: the exact x/y ranges of the
//! header cells, row labels and body cells. The same geometry drives both
//! rendering and the mouse hit-test in the translator, so the two can never
//! disagree.

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{AppState, DataState},
    domain::{
        classify,
        dataset::Dataset,
        fmt::{self, NumeralStyle},
        stats::ColumnStats,
    },
    presentation::theme,
};

/// Lines at the bottom of the screen reserved for the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 2;

const COLUMN_SPACING: u16 = 1;
const MIN_COLUMN_WIDTH: u16 = 6;
const MEAN_LABEL: &str = "mean";
const STD_DEV_LABEL: &str = "stddev";
const LOADING_PLACEHOLDER: &str = "Loading dataset...";

/// The screen region the grid is drawn into for a given terminal size.
pub fn grid_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(STATUS_BAR_HEIGHT))
}

/// What sits under a screen position within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridZone {
    ColumnHeader(usize),
    RowLabel(usize),
    Body { row: usize, column: usize },
    Outside,
}

/// Deterministic cell layout of a rendered grid.
///
/// Row label column on the left, then one fixed-width column per category
/// with a single space between columns. Row heights are one line: header at
/// the top, body rows below it, summary rows last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    area: Rect,
    label_width: u16,
    column_width: u16,
    row_count: usize,
    column_count: usize,
}

impl GridGeometry {
    pub fn new(
        area: Rect,
        dataset: &Dataset,
        stats: &ColumnStats,
        numerals: NumeralStyle,
    ) -> Self {
        let label_width = dataset
            .rows
            .iter()
            .map(|label| label.width())
            .chain([MEAN_LABEL.width(), STD_DEV_LABEL.width()])
            .max()
            .unwrap_or(0) as u16;

        let widest_cell = dataset
            .columns
            .iter()
            .map(|header| header.width())
            .chain(
                dataset
                    .data
                    .iter()
                    .flatten()
                    .map(|value| fmt::format_cell(*value, numerals).width()),
            )
            .chain(stats.iter().flat_map(|stat| {
                [
                    fmt::format_statistic(stat.mean, numerals).width(),
                    fmt::format_statistic(stat.std_dev, numerals).width(),
                ]
            }))
            .max()
            .unwrap_or(0) as u16;

        Self {
            area,
            label_width,
            column_width: widest_cell.max(MIN_COLUMN_WIDTH),
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
        }
    }

    pub fn label_width(&self) -> u16 {
        self.label_width
    }

    pub fn column_width(&self) -> u16 {
        self.column_width
    }

    fn data_origin_x(&self) -> u16 {
        self.area.x + self.label_width + COLUMN_SPACING
    }

    /// The data column covering screen column `x`, if any. The spacing gap
    /// between two columns belongs to neither.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        let origin = self.data_origin_x();
        if x < origin {
            return None;
        }
        let offset = x - origin;
        let stride = self.column_width + COLUMN_SPACING;
        let column = (offset / stride) as usize;
        let within_cell = offset % stride < self.column_width;
        (within_cell && column < self.column_count).then_some(column)
    }

    /// Hit-test a screen position against the rendered grid.
    pub fn zone_at(&self, x: u16, y: u16) -> GridZone {
        let in_area = x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height;
        if !in_area {
            return GridZone::Outside;
        }

        // Header line
        if y == self.area.y {
            return match self.column_at(x) {
                Some(column) => GridZone::ColumnHeader(column),
                None => GridZone::Outside,
            };
        }

        // Body rows; summary rows below them are not hover targets
        let row = usize::from(y - self.area.y - 1);
        if row >= self.row_count {
            return GridZone::Outside;
        }
        if x < self.area.x + self.label_width {
            return GridZone::RowLabel(row);
        }
        match self.column_at(x) {
            Some(column) => GridZone::Body { row, column },
            None => GridZone::Outside,
        }
    }
}

/// Grid component
///
/// Stateless; renders purely from `AppState` following the Elm architecture
/// pattern.
#[derive(Debug, Clone, Default)]
pub struct GridComponent;

impl GridComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the grid (or the loading placeholder) into `area`.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        match &state.data {
            DataState::Loaded { dataset, stats } => {
                self.render_grid(state, dataset, stats, frame, area);
            }
            // Loading, Idle and Failed all keep the placeholder; a fetch
            // failure is reported on the status bar, not here.
            _ => Self::render_placeholder(frame, area),
        }
    }

    fn render_placeholder(frame: &mut Frame, area: Rect) {
        let y = area.y + area.height / 2;
        let line = Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1);
        let placeholder = Paragraph::new(LOADING_PLACEHOLDER)
            .style(theme::placeholder_style())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, line);
    }

    fn render_grid(
        &self,
        state: &AppState,
        dataset: &Dataset,
        stats: &ColumnStats,
        frame: &mut Frame,
        area: Rect,
    ) {
        let numerals = state.config.config.numerals;
        let geometry = GridGeometry::new(area, dataset, stats, numerals);
        let hover = state.hover_selection();
        let label_width = usize::from(geometry.label_width());
        let column_width = usize::from(geometry.column_width());

        let mut lines: Vec<Line> = Vec::with_capacity(dataset.row_count() + 3);

        // Header: blank corner cell, then column labels
        let mut header = vec![Span::raw(" ".repeat(label_width))];
        for (c, name) in dataset.columns.iter().enumerate() {
            header.push(Span::raw(" "));
            header.push(Span::styled(
                pad_left(name, column_width),
                theme::header_style(hover.hovered_column() == Some(c)),
            ));
        }
        lines.push(Line::from(header));

        // Body rows
        for (r, label) in dataset.rows.iter().enumerate() {
            let mut spans = vec![Span::styled(
                pad_right(label, label_width),
                theme::label_style(hover.hovered_row() == Some(r)),
            )];
            for c in 0..dataset.column_count() {
                let value = dataset.value(r, c);
                let style = theme::apply_highlight(
                    theme::cell_style(classify(value)),
                    hover.highlight_for(r, c),
                );
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    pad_left(&fmt::format_cell(value, numerals), column_width),
                    style,
                ));
            }
            lines.push(Line::from(spans));
        }

        // Summary rows: mean, then population standard deviation
        lines.push(summary_line(
            MEAN_LABEL,
            stats.iter().map(|s| s.mean),
            label_width,
            column_width,
            numerals,
        ));
        lines.push(summary_line(
            STD_DEV_LABEL,
            stats.iter().map(|s| s.std_dev),
            label_width,
            column_width,
            numerals,
        ));

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn summary_line<'a>(
    label: &'a str,
    values: impl Iterator<Item = f64>,
    label_width: usize,
    column_width: usize,
    numerals: NumeralStyle,
) -> Line<'a> {
    let mut spans = vec![Span::styled(
        pad_right(label, label_width),
        theme::summary_style(),
    )];
    for value in values {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            pad_left(&fmt::format_statistic(value, numerals), column_width),
            theme::summary_style(),
        ));
    }
    Line::from(spans)
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}
