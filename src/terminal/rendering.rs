//! Rendering functions for the carousel screen.
//!
//! This module contains pure rendering logic separated from terminal
//! lifecycle management. All functions operate on ratatui Frame objects
//! without managing terminal state.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::layout::CarouselLayout;
use super::surface::TerminalSurface;
use super::text::{center, clip_columns, wrap_words};
use super::StatusBar;
use crate::carousel::Carousel;
use crate::reviews::Review;

/// Horizontal padding inside each review card.
const CARD_PADDING: usize = 2;

const TITLE: &str = "What our clients say";

/// Build the text lines of a review card `width` columns wide.
pub fn card_lines(review: &Review, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(CARD_PADDING * 2);
    let pad = " ".repeat(CARD_PADDING);

    let mut lines = vec![String::new(), center(&review.stars(), width), String::new()];
    for line in wrap_words(&format!("\u{201c}{}\u{201d}", review.text), inner) {
        lines.push(format!("{pad}{line}"));
    }
    lines.push(String::new());
    lines.push(center(&format!("- {}", review.byline()), width));
    lines
}

/// Column span of slide `index` relative to the track's left edge,
/// given the track offset in percent of `track_width`.
pub fn slide_left(index: usize, offset_percent: f64, track_width: u16) -> i64 {
    let width = i64::from(track_width);
    let shift = (offset_percent / 100.0 * f64::from(track_width)).round() as i64;
    index as i64 * width + shift
}

/// Render every slide that intersects the track.
pub fn render_track(
    frame: &mut ratatui::Frame,
    surface: &TerminalSurface,
    reviews: &[Review],
    track: Rect,
    now: Instant,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(track);
    frame.render_widget(block, track);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = i64::from(inner.width);
    let offset = surface.offset_at(now);

    for (index, review) in reviews.iter().enumerate() {
        let left = slide_left(index, offset, inner.width);
        let right = left + width;
        if right <= 0 || left >= width {
            continue;
        }

        let skip = (-left).max(0) as usize;
        let visible_left = left.max(0);
        let visible = (right.min(width) - visible_left) as usize;

        let style = if surface.slide_active_at(index, now) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = card_lines(review, inner.width as usize)
            .iter()
            .take(inner.height as usize)
            .map(|line| Line::from(Span::styled(clip_columns(line, skip, visible), style)))
            .collect();

        let area = Rect {
            x: inner.x + visible_left as u16,
            y: inner.y,
            width: visible as u16,
            height: inner.height,
        };
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Render the previous/next buttons and the indicator row.
pub fn render_controls(
    frame: &mut ratatui::Frame,
    surface: &TerminalSurface,
    layout: &CarouselLayout,
) {
    let button_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    frame.render_widget(
        Paragraph::new("‹").style(button_style(surface.previous_enabled())),
        layout.previous,
    );
    frame.render_widget(
        Paragraph::new("›").style(button_style(surface.next_enabled())),
        layout.next,
    );

    for (index, rect) in layout.indicators.iter().enumerate() {
        let (symbol, style) = if surface.indicator_active(index) {
            ("●", Style::default().fg(Color::Cyan))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(symbol).style(style), *rect);
    }
}

/// Render a status bar to a ratatui frame.
pub fn render_status_bar(
    frame: &mut ratatui::Frame,
    status_bar: &StatusBar,
    carousel: &Carousel<TerminalSurface>,
    area: Rect,
) {
    let status_text = status_bar.format(carousel);
    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status_paragraph, area);
}

/// Render a complete frame with all layers.
///
/// This renders:
/// 1. Title
/// 2. Slide track
/// 3. Buttons and indicators
/// 4. Status bar (bottom, if visible)
pub fn render_full_frame(
    frame: &mut ratatui::Frame,
    carousel: &Carousel<TerminalSurface>,
    reviews: &[Review],
    status_bar: &StatusBar,
    layout: &CarouselLayout,
    now: Instant,
) {
    let title = Paragraph::new(center(TITLE, layout.title.width as usize))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, layout.title);

    if reviews.is_empty() {
        frame.render_widget(Paragraph::new("No reviews yet."), layout.track);
    } else {
        render_track(frame, carousel.surface(), reviews, layout.track, now);
        render_controls(frame, carousel.surface(), layout);
    }

    if let Some(area) = layout.status {
        render_status_bar(frame, status_bar, carousel, area);
    }
}
