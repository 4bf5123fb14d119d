//! Terminal implementation of the carousel's rendering collaborator.
//!
//! The controller only issues commands; this surface remembers them with
//! timestamps so each redraw can sample the eased track offset and the
//! staggered slide highlights at the current instant.

use std::time::{Duration, Instant};

use crate::carousel::TrackSurface;

/// Default length of the eased slide transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(800);

/// Ease-in-out cubic, `t` in 0.0..=1.0.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Track offset moving from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OffsetAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    fn fixed(offset: f64, now: Instant) -> Self {
        Self {
            from: offset,
            to: offset,
            started: now,
            duration: Duration::ZERO,
        }
    }

    fn sample(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_in_out(t)
    }
}

/// Highlight state of one slide, switching at `at`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlideFlag {
    before: bool,
    after: bool,
    at: Instant,
}

impl SlideFlag {
    fn is_active(&self, now: Instant) -> bool {
        if now >= self.at {
            self.after
        } else {
            self.before
        }
    }
}

/// Visual state of the carousel in the terminal.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    track_width: u16,
    viewport_width: u16,
    transition: Duration,
    transition_enabled: bool,
    animation: OffsetAnimation,
    slides: Vec<SlideFlag>,
    indicators: Vec<bool>,
    previous_enabled: bool,
    next_enabled: bool,
}

impl TerminalSurface {
    /// Create a surface for `slides` slides with one indicator each.
    pub fn new(slides: usize, transition: Duration) -> Self {
        let now = Instant::now();
        Self {
            track_width: 0,
            viewport_width: 0,
            transition,
            transition_enabled: true,
            animation: OffsetAnimation::fixed(0.0, now),
            slides: vec![
                SlideFlag {
                    before: false,
                    after: false,
                    at: now,
                };
                slides
            ],
            indicators: vec![false; slides],
            previous_enabled: false,
            next_enabled: false,
        }
    }

    /// Update widths after a layout pass (columns).
    pub fn resize(&mut self, track_width: u16, viewport_width: u16) {
        self.track_width = track_width;
        self.viewport_width = viewport_width;
    }

    /// Track offset (percent) to draw at `now`.
    pub fn offset_at(&self, now: Instant) -> f64 {
        self.animation.sample(now)
    }

    /// Whether the offset is still easing at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.animation.started) < self.animation.duration
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn slide_active_at(&self, index: usize, now: Instant) -> bool {
        self.slides
            .get(index)
            .is_some_and(|flag| flag.is_active(now))
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn previous_enabled(&self) -> bool {
        self.previous_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    fn apply_offset(&mut self, percent: f64, now: Instant) {
        let current = self.animation.sample(now);
        self.animation = if self.transition_enabled && !self.transition.is_zero() {
            OffsetAnimation {
                from: current,
                to: percent,
                started: now,
                duration: self.transition,
            }
        } else {
            OffsetAnimation::fixed(percent, now)
        };
    }

    fn mark_slide(&mut self, index: usize, active: bool, delay: Duration, now: Instant) {
        if let Some(flag) = self.slides.get_mut(index) {
            *flag = SlideFlag {
                before: flag.is_active(now),
                after: active,
                at: now + delay,
            };
        }
    }
}

impl TrackSurface for TerminalSurface {
    fn set_offset(&mut self, percent: f64) {
        self.apply_offset(percent, Instant::now());
    }

    fn set_transition(&mut self, enabled: bool) {
        if !enabled {
            // Freeze wherever the easing currently is.
            let now = Instant::now();
            self.animation = OffsetAnimation::fixed(self.animation.sample(now), now);
        }
        self.transition_enabled = enabled;
    }

    fn track_width(&self) -> f64 {
        f64::from(self.track_width)
    }

    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport_width)
    }

    fn set_slide_active(&mut self, index: usize, active: bool, delay: Duration) {
        self.mark_slide(index, active, delay, Instant::now());
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
    }

    fn set_previous_enabled(&mut self, enabled: bool) {
        self.previous_enabled = enabled;
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }
}
