//! Composition root
//!
//! Wires the terminal event stream, the update loop and the background
//! dataset fetch together.

pub mod app_runner;
