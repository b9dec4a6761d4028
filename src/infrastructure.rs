//! Infrastructure layer
//!
//! Side-effectful edges of the application:
//! - Dataset fetching over HTTP
//! - Terminal lifecycle and event stream

pub mod fetch;
pub mod tui;
