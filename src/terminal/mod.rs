//! Terminal host for the carousel - raw mode, TUI wrapper, layout, and rendering.

mod layout;
mod raw_mode;
mod rendering;
mod status_bar;
mod surface;
mod text;
mod tui;

// Re-export public types from submodules
pub use layout::{contains, CarouselLayout};
pub use rendering::{card_lines, slide_left};
pub use status_bar::StatusBar;
pub use surface::{ease_in_out, TerminalSurface, DEFAULT_TRANSITION};
pub use text::{center, clip_columns, wrap_words};
pub use tui::Tui;
