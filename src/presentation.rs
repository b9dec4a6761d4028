//! Presentation layer
//!
//! Pure, stateless components that render from `AppState`. No component owns
//! mutable state; hover and dataset state live in the Elm core and rendering
//! never mutates them.

pub mod components;
pub mod theme;
