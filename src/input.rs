//! Keyboard and mouse input handling.
//!
//! This module handles:
//! - Mapping crossterm key events onto carousel commands
//! - Turning mouse events into clicks, drags and hover transitions
//! - Applying the resulting actions to the controller

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::carousel::{Carousel, TrackSurface};
use crate::terminal::{contains, CarouselLayout, StatusBar};

/// A discrete input the event loop feeds to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Previous,
    Next,
    /// Indicator click (0-based).
    Indicator(usize),
    PointerEnter,
    PointerLeave,
    /// Pointer pressed on the track at this column.
    DragStart(f64),
    DragMove(f64),
    DragEnd(f64),
    ToggleStatusBar,
    Quit,
}

/// Map a key press onto an action.
///
/// - Left / h: previous
/// - Right / l: next
/// - 1-9: indicator
/// - s: toggle status bar
/// - q / Esc / Ctrl+C: quit
pub fn handle_key_event(event: KeyEvent) -> Option<InputAction> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(InputAction::Previous),
        KeyCode::Right | KeyCode::Char('l') => Some(InputAction::Next),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10).unwrap_or(1) as usize;
            Some(InputAction::Indicator(digit - 1))
        }
        KeyCode::Char('s') => Some(InputAction::ToggleStatusBar),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Map a mouse event onto actions, in the order they must be applied.
///
/// Any mouse event whose position crosses the track boundary first emits
/// a pointer enter/leave. A left press lands on a button, an indicator, or
/// starts a drag on the track; drag and release only matter mid-drag.
pub fn map_mouse(
    event: MouseEvent,
    layout: &CarouselLayout,
    hovering: bool,
    dragging: bool,
) -> Vec<InputAction> {
    let mut actions = Vec::new();
    let (col, row) = (event.column, event.row);
    let inside = contains(layout.track, col, row);

    if inside && !hovering {
        actions.push(InputAction::PointerEnter);
    } else if !inside && hovering {
        actions.push(InputAction::PointerLeave);
    }

    let x = f64::from(col);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.previous, col, row) {
                actions.push(InputAction::Previous);
            } else if contains(layout.next, col, row) {
                actions.push(InputAction::Next);
            } else if let Some(index) = layout.indicator_at(col, row) {
                actions.push(InputAction::Indicator(index));
            } else if inside {
                actions.push(InputAction::DragStart(x));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if dragging => {
            actions.push(InputAction::DragMove(x));
        }
        MouseEventKind::Up(MouseButton::Left) if dragging => {
            actions.push(InputAction::DragEnd(x));
        }
        _ => {}
    }

    actions
}

/// Apply `action` to the carousel. Returns false when the app should quit.
pub fn apply_action<S: TrackSurface>(
    action: InputAction,
    carousel: &mut Carousel<S>,
    status_bar: &mut StatusBar,
    now: Instant,
) -> bool {
    match action {
        InputAction::Previous => carousel.previous(),
        InputAction::Next => carousel.next(),
        InputAction::Indicator(index) => {
            // Keyboard shortcuts can name indicators that do not exist.
            if index < carousel.slide_count() {
                carousel.select_indicator(index);
            }
        }
        InputAction::PointerEnter => carousel.pointer_enter(),
        InputAction::PointerLeave => carousel.pointer_leave(now),
        InputAction::DragStart(x) => carousel.drag_start(x),
        InputAction::DragMove(x) => carousel.drag_move(x),
        InputAction::DragEnd(x) => carousel.drag_end(x, now),
        InputAction::ToggleStatusBar => status_bar.toggle(),
        InputAction::Quit => return false,
    }
    true
}
