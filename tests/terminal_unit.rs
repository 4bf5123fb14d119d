//! Unit tests for the terminal host (layout, mouse mapping, status bar, cards).
//!
//! These tests cover the pure logic of the terminal front end without
//! requiring a real terminal.

use std::time::{Duration, Instant};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;
use reviews_carousel::carousel::{Carousel, CarouselSettings, RecordingSurface};
use reviews_carousel::input::{apply_action, map_mouse, InputAction};
use reviews_carousel::reviews::Review;
use reviews_carousel::terminal::{
    card_lines, contains, slide_left, CarouselLayout, StatusBar, TerminalSurface,
};

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ==================== CarouselLayout Tests ====================

#[test]
fn test_layout_with_status_bar() {
    let layout = CarouselLayout::compute(screen(), 4, true);

    assert_eq!(
        layout.status,
        Some(Rect {
            x: 0,
            y: 23,
            width: 80,
            height: 1
        })
    );
    assert_eq!(layout.track, Rect::new(4, 2, 72, 19));
    assert_eq!(layout.previous, Rect::new(1, 11, 2, 1));
    assert_eq!(layout.next, Rect::new(77, 11, 2, 1));
    assert_eq!(layout.indicators.len(), 4);
    assert!(layout.indicators.iter().all(|r| r.y == 22));
}

#[test]
fn test_layout_without_status_bar_uses_full_height() {
    let layout = CarouselLayout::compute(screen(), 4, false);
    assert_eq!(layout.status, None);
    assert_eq!(layout.track.height, 20);
}

#[test]
fn test_layout_indicators_are_centered_and_spaced() {
    let layout = CarouselLayout::compute(screen(), 3, true);
    let xs: Vec<u16> = layout.indicators.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![37, 39, 41]);
    assert_eq!(layout.indicator_at(39, 22), Some(1));
    assert_eq!(layout.indicator_at(40, 22), None);
}

#[test]
fn test_layout_tiny_area_does_not_panic() {
    let layout = CarouselLayout::compute(Rect::new(0, 0, 3, 2), 10, true);
    assert!(layout.indicators.is_empty());
    let layout = CarouselLayout::compute(Rect::new(0, 0, 0, 0), 10, true);
    assert_eq!(layout.status, None);
}

#[test]
fn test_contains_edges() {
    let rect = Rect::new(4, 2, 10, 5);
    assert!(contains(rect, 4, 2));
    assert!(contains(rect, 13, 6));
    assert!(!contains(rect, 14, 6));
    assert!(!contains(rect, 4, 7));
}

// ==================== Mouse Mapping Tests ====================

#[test]
fn test_press_on_track_enters_and_starts_drag() {
    let layout = CarouselLayout::compute(screen(), 4, true);
    let actions = map_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), 40, 10),
        &layout,
        false,
        false,
    );
    assert_eq!(
        actions,
        vec![InputAction::PointerEnter, InputAction::DragStart(40.0)]
    );
}

#[test]
fn test_move_out_of_track_leaves() {
    let layout = CarouselLayout::compute(screen(), 4, true);
    let actions = map_mouse(mouse(MouseEventKind::Moved, 0, 0), &layout, true, false);
    assert_eq!(actions, vec![InputAction::PointerLeave]);

    let actions = map_mouse(mouse(MouseEventKind::Moved, 40, 10), &layout, true, false);
    assert!(actions.is_empty());
}

#[test]
fn test_release_outside_track_ends_drag_after_leave() {
    let layout = CarouselLayout::compute(screen(), 4, true);
    let actions = map_mouse(
        mouse(MouseEventKind::Up(MouseButton::Left), 79, 0),
        &layout,
        true,
        true,
    );
    assert_eq!(
        actions,
        vec![InputAction::PointerLeave, InputAction::DragEnd(79.0)]
    );
}

#[test]
fn test_drag_only_reported_mid_drag() {
    let layout = CarouselLayout::compute(screen(), 4, true);
    let event = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10);
    assert!(map_mouse(event, &layout, true, false).is_empty());
    assert_eq!(
        map_mouse(event, &layout, true, true),
        vec![InputAction::DragMove(30.0)]
    );
}

#[test]
fn test_clicks_on_buttons_and_indicators() {
    let layout = CarouselLayout::compute(screen(), 4, true);
    let down = MouseEventKind::Down(MouseButton::Left);

    assert_eq!(
        map_mouse(mouse(down, 1, 11), &layout, false, false),
        vec![InputAction::Previous]
    );
    assert_eq!(
        map_mouse(mouse(down, 78, 11), &layout, false, false),
        vec![InputAction::Next]
    );
    let third = layout.indicators[2];
    assert_eq!(
        map_mouse(mouse(down, third.x, third.y), &layout, false, false),
        vec![InputAction::Indicator(2)]
    );
}

#[test]
fn test_mouse_swipe_moves_carousel() {
    let t0 = Instant::now();
    let surface = RecordingSurface::new(4, 4).with_widths(70.0, 80.0);
    let mut carousel = Carousel::new(surface, 4, 4, CarouselSettings::default());
    let mut status_bar = StatusBar::new();
    carousel.mount(t0);

    let layout = CarouselLayout::compute(screen(), 4, true);
    let events = [
        mouse(MouseEventKind::Down(MouseButton::Left), 60, 10),
        mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10),
        mouse(MouseEventKind::Up(MouseButton::Left), 30, 10),
    ];
    for event in events {
        let actions = map_mouse(
            event,
            &layout,
            carousel.is_hovering(),
            carousel.is_dragging(),
        );
        for action in actions {
            assert!(apply_action(action, &mut carousel, &mut status_bar, t0));
        }
    }

    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.is_hovering());
    assert!(!carousel.auto_advance_active());
}

#[test]
fn test_quit_and_out_of_range_indicator_actions() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(
        RecordingSurface::new(2, 2),
        2,
        2,
        CarouselSettings::default(),
    );
    let mut status_bar = StatusBar::new();
    carousel.mount(t0);

    assert!(apply_action(
        InputAction::Indicator(8),
        &mut carousel,
        &mut status_bar,
        t0
    ));
    assert_eq!(carousel.current_index(), 0);

    assert!(apply_action(
        InputAction::ToggleStatusBar,
        &mut carousel,
        &mut status_bar,
        t0
    ));
    assert!(!status_bar.visible);

    assert!(!apply_action(
        InputAction::Quit,
        &mut carousel,
        &mut status_bar,
        t0
    ));
}

// ==================== StatusBar Tests ====================

#[test]
fn test_status_bar_format() {
    let t0 = Instant::now();
    let mut carousel = Carousel::new(
        RecordingSurface::new(4, 4),
        4,
        4,
        CarouselSettings::default(),
    );
    let status_bar = StatusBar::new();
    carousel.mount(t0);
    carousel.next();
    assert_eq!(status_bar.format(&carousel), " review 2/4 | auto:on ");

    carousel.pointer_enter();
    carousel.drag_start(10.0);
    assert_eq!(
        status_bar.format(&carousel),
        " review 2/4 | auto:off | drag | hover "
    );
}

#[test]
fn test_status_bar_empty_carousel() {
    let carousel = Carousel::new(
        RecordingSurface::new(0, 0),
        0,
        0,
        CarouselSettings::default(),
    );
    assert_eq!(StatusBar::new().format(&carousel), " no reviews ");
}

#[test]
fn test_status_bar_toggle() {
    let mut status_bar = StatusBar::with_visibility(false);
    status_bar.toggle();
    assert!(status_bar.visible);
}

// ==================== Card Rendering Tests ====================

#[test]
fn test_card_lines_layout() {
    let review = Review::new("Ada", Some("CTO"), "Fast and friendly", 4);
    let lines = card_lines(&review, 20);

    assert_eq!(lines[0], "");
    assert!(lines[1].trim() == "★★★★☆");
    assert_eq!(lines[3], "  \u{201c}Fast and");
    assert_eq!(lines[4], "  friendly\u{201d}");
    assert_eq!(lines.last().unwrap().trim(), "- Ada, CTO");
}

#[test]
fn test_card_lines_fit_wide_text() {
    let review = Review::new("山田", Some("店長"), "とても速くて親切な対応でした", 5);
    let width = 16;
    for line in card_lines(&review, width) {
        assert!(line.width() <= width, "{line:?} is wider than {width} columns");
    }
    let byline = card_lines(&review, width).pop().unwrap();
    assert_eq!(byline, "  - 山田, 店長");
}

#[test]
fn test_slide_left_follows_offset() {
    assert_eq!(slide_left(0, 0.0, 70), 0);
    assert_eq!(slide_left(1, 0.0, 70), 70);
    assert_eq!(slide_left(1, -100.0, 70), 0);
    assert_eq!(slide_left(2, -150.0, 70), 35);
}

// ==================== TerminalSurface Tests ====================

#[test]
fn test_terminal_surface_under_controller() {
    let t0 = Instant::now();
    let surface = TerminalSurface::new(3, Duration::from_millis(800));
    let mut carousel = Carousel::new(surface, 3, 3, CarouselSettings::default());
    carousel.surface_mut().resize(70, 80);
    carousel.mount(t0);
    carousel.on_frame();

    // First placement never animates.
    let later = Instant::now();
    assert_eq!(carousel.surface().offset_at(later), 0.0);
    assert!(!carousel.surface().transition_enabled());
    carousel.on_frame();
    assert!(carousel.surface().transition_enabled());

    assert!(carousel.surface().indicator_active(0));
    assert!(!carousel.surface().previous_enabled());
    assert!(carousel.surface().next_enabled());

    carousel.go_to(2, true);
    carousel.on_frame();
    let settled = Instant::now() + Duration::from_secs(2);
    assert_eq!(carousel.surface().offset_at(settled), -200.0);
    assert!(carousel.surface().slide_active_at(2, settled));
    assert!(!carousel.surface().slide_active_at(0, settled));
    assert!(!carousel.surface().next_enabled());
}
