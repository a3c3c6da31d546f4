//! archview TUI: terminal viewer for the architecture notes.
//!
//! Screen layout:
//! 1. Header: catalog title and the active view's breadcrumb
//! 2. Navigation bar: one dropdown button per category
//! 3. Content: the active view's body with collapsible module cards
//! 4. Status bar: key hints, open-card count, last message

pub mod app;
pub mod cli;
pub mod input;
pub mod mouse;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use mouse::handle_mouse;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
