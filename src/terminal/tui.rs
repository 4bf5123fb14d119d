//! TUI wrapper that manages the ratatui terminal with crossterm backend.
//!
//! This module handles terminal lifecycle (entering/exiting raw mode,
//! alternate screen, mouse capture) while delegating rendering to the
//! `rendering` module.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::Ordering;
use std::time::Instant;

use super::layout::CarouselLayout;
use super::raw_mode::{install_panic_hook, restore_best_effort, RAW_MODE_ACTIVE};
use super::rendering;
use super::{StatusBar, TerminalSurface};
use crate::carousel::Carousel;
use crate::reviews::Review;

/// TUI wrapper that manages the ratatui terminal with crossterm backend.
///
/// This struct handles:
/// - Entering raw mode, alternate screen and mouse capture on creation
/// - Restoring terminal state on drop (or explicit restore)
/// - Panic recovery (terminal is restored even if the app panics)
pub struct Tui {
    /// The ratatui terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Whether this TUI is responsible for cleanup
    active: bool,
}

impl Tui {
    /// Create a new TUI, entering raw mode and alternate screen.
    ///
    /// # Errors
    /// Returns an error if enabling raw mode, entering the alternate
    /// screen, or creating the terminal fails.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            EnableMouseCapture
        )?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the terminal to its original state.
    ///
    /// After calling this, the Tui's drop will be a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            crossterm::execute!(
                self.terminal.backend_mut(),
                DisableMouseCapture,
                crossterm::terminal::LeaveAlternateScreen,
            )?;
            disable_raw_mode()?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Check if the TUI is still active (not yet restored).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw the carousel screen and return the layout used for hit testing.
    ///
    /// The surface is resized to the laid-out track before drawing so drag
    /// arithmetic always sees the current geometry.
    pub fn draw(
        &mut self,
        carousel: &mut Carousel<TerminalSurface>,
        reviews: &[Review],
        status_bar: &StatusBar,
        now: Instant,
    ) -> io::Result<CarouselLayout> {
        let size = self.terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let layout = CarouselLayout::compute(
            area,
            carousel.surface().indicator_count(),
            status_bar.visible,
        );
        carousel
            .surface_mut()
            .resize(layout.track.width.saturating_sub(2), area.width);

        let carousel = &*carousel;
        self.terminal.draw(|frame| {
            rendering::render_full_frame(frame, carousel, reviews, status_bar, &layout, now);
        })?;

        Ok(layout)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            restore_best_effort();
            let _ = self.terminal.show_cursor();
        }
    }
}
