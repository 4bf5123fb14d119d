//! The carousel state machine.
//!
//! [`Carousel`] owns the slide index, the drag gesture, the auto-advance
//! timer and the next-frame queue. Hosts feed it discrete events (clicks,
//! pointer events, timer polls, frame callbacks) one at a time; every visual
//! effect is delegated to the injected [`TrackSurface`].

use std::time::{Duration, Instant};

use super::frame::{FrameQueue, FrameTask};
use super::gesture::{DragGesture, SwipeIntent};
use super::surface::TrackSurface;
use super::timer::{AutoAdvance, DEFAULT_AUTO_ADVANCE};

/// Default per-slide delay for staggered activation styling.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(50);

/// Default swipe threshold as a fraction of viewport width.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.2;

/// Tunables for a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Period of the auto-advance timer.
    pub auto_advance: Duration,
    /// Activation delay per slide index.
    pub stagger: Duration,
    /// Fraction of viewport width a drag must exceed to change slides.
    pub swipe_threshold: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance: DEFAULT_AUTO_ADVANCE,
            stagger: DEFAULT_STAGGER,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Carousel controller over `slide_count` slides rendered by `S`.
///
/// With zero slides the controller is inert: every operation is a no-op.
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    slide_count: usize,
    indicator_count: usize,
    settings: CarouselSettings,
    current_index: usize,
    gesture: DragGesture,
    timer: AutoAdvance,
    frames: FrameQueue,
    hovering: bool,
}

impl<S: TrackSurface> Carousel<S> {
    /// Create a controller. Nothing is rendered until [`Carousel::mount`].
    pub fn new(
        surface: S,
        slide_count: usize,
        indicator_count: usize,
        settings: CarouselSettings,
    ) -> Self {
        Self {
            surface,
            slide_count,
            indicator_count,
            settings,
            current_index: 0,
            gesture: DragGesture::Idle,
            timer: AutoAdvance::new(settings.auto_advance),
            frames: FrameQueue::new(),
            hovering: false,
        }
    }

    /// Position the track on the first slide without animating and start
    /// the auto-advance timer.
    pub fn mount(&mut self, now: Instant) {
        if self.is_inert() {
            log::debug!("carousel has no slides, staying inert");
            return;
        }
        self.go_to(0, false);
        self.resume_auto_advance(now);
        log::info!("carousel mounted with {} slides", self.slide_count);
    }

    /// Cancel the pending timer and drop any queued frame work.
    pub fn unmount(&mut self) {
        self.timer.cancel();
        self.frames.clear();
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn auto_advance_active(&self) -> bool {
        self.timer.is_active()
    }

    /// The auto-advance timer (exposed for inspection).
    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    /// Whether any rendering-frame work is still queued.
    pub fn has_pending_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Move to `target`.
    ///
    /// Targets past the last slide are clamped to it. With `animate` false
    /// the transition is disabled now and re-enabled one frame after the
    /// offset is applied, so the first placement never animates.
    pub fn go_to(&mut self, target: usize, animate: bool) {
        if self.is_inert() {
            return;
        }

        let index = if target > self.last_index() {
            log::warn!(
                "slide {} out of range (0..{}), clamping",
                target,
                self.slide_count
            );
            self.last_index()
        } else {
            target
        };

        self.current_index = index;

        if !animate {
            self.surface.set_transition(false);
        }
        self.frames.schedule(0, FrameTask::ApplyIndexOffset);
        if !animate {
            self.frames.schedule(1, FrameTask::EnableTransition);
        }

        for i in 0..self.slide_count {
            let delay = self.settings.stagger * i as u32;
            self.surface.set_slide_active(i, i == index, delay);
        }
        for i in 0..self.indicator_count {
            self.surface.set_indicator_active(i, i == index);
        }

        self.surface.set_previous_enabled(index != 0);
        self.surface.set_next_enabled(index != self.last_index());
    }

    /// Advance one slide. Stops at the last slide.
    pub fn next(&mut self) {
        if !self.is_inert() && self.current_index < self.last_index() {
            self.go_to(self.current_index + 1, true);
        }
    }

    /// Go back one slide. Stops at the first slide.
    pub fn previous(&mut self) {
        if !self.is_inert() && self.current_index > 0 {
            self.go_to(self.current_index - 1, true);
        }
    }

    /// Jump to the slide bound to indicator `index`.
    pub fn select_indicator(&mut self, index: usize) {
        self.go_to(index, true);
    }

    /// Pointer entered the track: pause auto-advance.
    pub fn pointer_enter(&mut self) {
        self.hovering = true;
        self.timer.cancel();
    }

    /// Pointer left the track: start a fresh auto-advance timer.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovering = false;
        if !self.gesture.is_dragging() {
            self.resume_auto_advance(now);
        }
    }

    fn resume_auto_advance(&mut self, now: Instant) {
        if self.is_inert() || self.hovering {
            return;
        }
        self.timer.start(now);
    }

    /// Fire the auto-advance timer if a tick is due.
    ///
    /// Unlike [`Carousel::next`], a tick on the last slide wraps to the first.
    /// Returns true when a tick fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_inert() || !self.timer.poll(now) {
            return false;
        }

        if self.current_index < self.last_index() {
            self.go_to(self.current_index + 1, true);
        } else {
            self.go_to(0, true);
        }
        true
    }

    /// Run the work queued for this rendering frame.
    pub fn on_frame(&mut self) {
        for task in self.frames.take_next() {
            match task {
                FrameTask::ApplyIndexOffset => {
                    let offset = self.current_index as f64 * -100.0;
                    self.surface.set_offset(offset);
                }
                FrameTask::EnableTransition => self.surface.set_transition(true),
            }
        }
    }

    /// Pointer pressed on the track at `pointer_x`.
    pub fn drag_start(&mut self, pointer_x: f64) {
        if self.is_inert() {
            return;
        }
        self.gesture.begin(pointer_x, self.current_index);
        self.surface.set_transition(false);
        self.timer.cancel();
    }

    /// Pointer moved while pressed. Ignored unless a drag is in progress.
    pub fn drag_move(&mut self, pointer_x: f64) {
        let width = self.surface.track_width();
        if let Some(offset) = self.gesture.track(pointer_x, width) {
            self.surface.set_offset(offset);
        }
    }

    /// Pointer released at `pointer_x`. Ignored unless a drag is in progress.
    pub fn drag_end(&mut self, pointer_x: f64, now: Instant) {
        let threshold = self.settings.swipe_threshold * self.surface.viewport_width();
        let Some(intent) = self.gesture.finish(pointer_x, threshold) else {
            return;
        };

        self.surface.set_transition(true);

        let target = match intent {
            SwipeIntent::Forward if self.current_index < self.last_index() => {
                self.current_index + 1
            }
            SwipeIntent::Backward if self.current_index > 0 => self.current_index - 1,
            _ => self.current_index,
        };
        log::debug!("swipe {:?} resolved to slide {}", intent, target);
        self.go_to(target, true);

        self.resume_auto_advance(now);
    }
}
