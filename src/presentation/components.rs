pub mod grid;
pub mod status_bar;

pub use grid::GridComponent;
pub use status_bar::StatusBarComponent;
