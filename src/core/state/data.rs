use crate::{
    core::{cmd::Cmd, msg::data::DataMsg},
    domain::{
        dataset::Dataset,
        stats::{compute_column_statistics, ColumnStats},
    },
};

/// Lifecycle of the one-shot dataset fetch.
///
/// The dataset and its statistics always travel together: statistics are
/// recomputed exactly when a dataset arrives, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DataState {
    /// Startup; the fetch has not been requested yet.
    #[default]
    Idle,
    /// The fetch is in flight (or has failed; see `Failed`). The grid shows
    /// a loading placeholder.
    Loading,
    /// The fetch resolved; dataset and derived statistics are immutable.
    Loaded {
        dataset: Dataset,
        stats: ColumnStats,
    },
    /// The fetch failed. The grid keeps its loading placeholder; the error
    /// is surfaced on the status bar and in the log.
    Failed { error: String },
}

impl DataState {
    /// Data-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DataMsg) -> Vec<Cmd> {
        match msg {
            DataMsg::Load => {
                // Exactly one fetch per application lifetime: only the
                // initial Idle state may start one.
                if *self == Self::Idle {
                    *self = Self::Loading;
                    vec![Cmd::FetchDataset]
                } else {
                    vec![]
                }
            }

            DataMsg::DatasetLoaded(dataset) => {
                let stats = compute_column_statistics(&dataset);
                *self = Self::Loaded { dataset, stats };
                vec![]
            }

            DataMsg::LoadFailed(error) => {
                log::error!("dataset fetch failed: {error}");
                *self = Self::Failed {
                    error: error.clone(),
                };
                vec![Cmd::LogError { message: error }]
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Loaded { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    pub fn column_stats(&self) -> Option<&ColumnStats> {
        match self {
            Self::Loaded { stats, .. } => Some(stats),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
