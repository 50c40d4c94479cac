//! Reusable UI components.

mod progress_bar;
mod sidebar;

pub use progress_bar::ProgressBar;
pub use sidebar::Sidebar;
