use serde::{Deserialize, Serialize};

/// Elm-like command definitions
///
/// Represents side effects produced by the update function and executed by
/// the host runner. Cmd captures application intent (what to do); the
/// infrastructure layer decides how to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Issue the single HTTP GET for the dataset.
    FetchDataset,

    /// Log an error without touching state.
    LogError { message: String },

    /// Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    /// Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchDataset => true,
            Cmd::LogError { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_async),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::FetchDataset]), Cmd::FetchDataset);
        assert_eq!(
            Cmd::batch(vec![Cmd::FetchDataset, Cmd::None]),
            Cmd::Batch(vec![Cmd::FetchDataset, Cmd::None])
        );
    }

    #[test]
    fn test_is_async() {
        assert!(Cmd::FetchDataset.is_async());
        assert!(!Cmd::None.is_async());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::FetchDataset]).is_async());
    }
}
