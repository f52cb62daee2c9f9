pub mod overtime;
pub mod panel;
pub mod punch;
