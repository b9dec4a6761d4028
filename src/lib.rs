//! # Heatgrid - Terminal Heatmap Grid Viewer
//!
//! Fetches a years-by-categories dataset over HTTP and renders it as an
//! interactive heatmap table with per-column summary statistics. Built with
//! Ratatui around an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (network fetch, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! Raw terminal and service events enter as `core::raw_msg::RawMsg`, are
//! translated into domain messages by `core::translator`, folded through the
//! update function, and the resulting commands are executed by the
//! `integration::app_runner`.
//!
//! ## Example Usage
//!
//! ```rust
//! use heatgrid::{
//!     config::Config,
//!     core::{msg::Msg, msg::data::DataMsg, state::AppState, update::update},
//! };
//!
//! let initial_state = AppState::new(Config::default());
//! let (new_state, commands) = update(Msg::Data(DataMsg::Load), initial_state);
//!
//! // The state is now loading and the commands carry the fetch to execute
//! assert!(!commands.is_empty());
//! ```

#![allow(dead_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
