//! Domain logic
//!
//! This module contains domain-specific logic that is pure, synchronous and
//! free of I/O:
//! - Dataset decoding and shape validation
//! - Per-column statistics
//! - Color-bucket classification
//! - Hover/highlight state machine
//! - Value formatting

pub mod color;
pub mod dataset;
pub mod fmt;
pub mod hover;
pub mod stats;

pub use color::{classify, ColorBucket};
pub use dataset::{Dataset, DatasetError};
pub use fmt::NumeralStyle;
pub use hover::{CellHighlight, HighlightPolicy, HoverSelection};
pub use stats::{compute_column_statistics, ColumnStatistic, ColumnStats};
