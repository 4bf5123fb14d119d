//! Async event loop driving the carousel in the terminal.
//!
//! Everything runs on one task: input events and frame ticks are handled
//! one at a time, each to completion, so the controller needs no locking.

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use std::time::{Duration, Instant};

use crate::carousel::Carousel;
use crate::input::{apply_action, handle_key_event, map_mouse, InputAction};
use crate::reviews::Review;
use crate::terminal::{StatusBar, TerminalSurface, Tui};

/// Rendering frame interval (~60 FPS).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Async main event loop using tokio::select! for concurrent handling.
///
/// This loop handles two concerns:
/// 1. Terminal events (keyboard, mouse, resize) via crossterm EventStream
/// 2. Frame ticks: queued frame work, auto-advance polling, and redraw
///
/// The loop exits on a quit action or when the event stream ends.
pub async fn run(
    tui: &mut Tui,
    carousel: &mut Carousel<TerminalSurface>,
    reviews: &[Review],
    status_bar: &mut StatusBar,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut event_stream = EventStream::new();

    let mut frame_interval = tokio::time::interval(FRAME_INTERVAL);
    frame_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Lay out once so the surface knows its widths before the first event.
    let mut layout = tui.draw(carousel, reviews, status_bar, Instant::now())?;
    carousel.mount(Instant::now());

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                let now = Instant::now();
                let actions: Vec<InputAction> = match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        handle_key_event(key_event).into_iter().collect()
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => map_mouse(
                        mouse_event,
                        &layout,
                        carousel.is_hovering(),
                        carousel.is_dragging(),
                    ),
                    Some(Ok(Event::Resize(_, _))) => {
                        layout = tui.draw(carousel, reviews, status_bar, now)?;
                        Vec::new()
                    }
                    Some(Ok(_)) => Vec::new(),
                    Some(Err(e)) => return Err(Box::new(e)),
                    None => break,
                };

                for action in actions {
                    log::trace!("input: {:?}", action);
                    if !apply_action(action, carousel, status_bar, now) {
                        carousel.unmount();
                        return Ok(());
                    }
                }
            }

            _ = frame_interval.tick() => {
                let now = Instant::now();
                carousel.on_frame();
                if carousel.poll(now) {
                    log::debug!("auto-advanced to slide {}", carousel.current_index());
                }
                layout = tui.draw(carousel, reviews, status_bar, now)?;
            }
        }
    }

    carousel.unmount();
    Ok(())
}
