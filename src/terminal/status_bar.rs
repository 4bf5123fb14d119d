//! Status bar for displaying carousel state at the bottom of the screen.

use crate::carousel::{Carousel, TrackSurface};

/// Status bar for displaying carousel state at the bottom of the screen.
///
/// Shows: review position | auto-advance on/off | drag | hover
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default settings (visible).
    pub fn new() -> Self {
        Self { visible: true }
    }

    /// Create a status bar with the specified visibility.
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Format the status bar text based on the carousel state.
    ///
    /// Format: " review i/N | auto:on/off | drag | hover "
    pub fn format<S: TrackSurface>(&self, carousel: &Carousel<S>) -> String {
        if carousel.slide_count() == 0 {
            return " no reviews ".to_string();
        }

        let mut text = format!(
            " review {}/{} | {}",
            carousel.current_index() + 1,
            carousel.slide_count(),
            if carousel.auto_advance_active() {
                "auto:on"
            } else {
                "auto:off"
            },
        );
        if carousel.is_dragging() {
            text.push_str(" | drag");
        }
        if carousel.is_hovering() {
            text.push_str(" | hover");
        }
        text.push(' ');
        text
    }
}
