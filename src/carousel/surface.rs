//! Rendering collaborator for the carousel controller.
//!
//! The controller never styles anything itself. Every visual effect goes
//! through a [`TrackSurface`], which lets the terminal host, tests, and any
//! other front end share the same state machine.

use std::time::Duration;

/// Styling capabilities the controller needs from its host.
///
/// Slides and indicators are addressed by position. The previous/next
/// affordances are optional: hosts without them keep the default no-op
/// implementations.
pub trait TrackSurface {
    /// Apply a horizontal transform to the track, in percent of track width.
    fn set_offset(&mut self, percent: f64);

    /// Enable or disable the eased transition on the track.
    fn set_transition(&mut self, enabled: bool);

    /// Current width of the track (pixels, or columns for a terminal).
    fn track_width(&self) -> f64;

    /// Width of the whole viewport, used for the swipe threshold.
    fn viewport_width(&self) -> f64;

    /// Mark a slide active or inactive once `delay` has elapsed.
    fn set_slide_active(&mut self, index: usize, active: bool, delay: Duration);

    /// Mark an indicator active or inactive.
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Enable or disable the "previous" affordance.
    fn set_previous_enabled(&mut self, _enabled: bool) {}

    /// Enable or disable the "next" affordance.
    fn set_next_enabled(&mut self, _enabled: bool) {}
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Offset(f64),
    Transition(bool),
    SlideActive {
        index: usize,
        active: bool,
        delay: Duration,
    },
    IndicatorActive {
        index: usize,
        active: bool,
    },
    PreviousEnabled(bool),
    NextEnabled(bool),
}

/// Surface that records every call and keeps the resulting state.
///
/// Slide activation delays are recorded but treated as already elapsed,
/// so `active_slides()` reflects the settled state.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    track_width: f64,
    viewport_width: f64,
    offset: Option<f64>,
    transition: bool,
    slides: Vec<bool>,
    indicators: Vec<bool>,
    previous_enabled: Option<bool>,
    next_enabled: Option<bool>,
}

impl RecordingSurface {
    /// Create a surface with the given slide and indicator counts.
    ///
    /// Track and viewport widths default to 1000.
    pub fn new(slides: usize, indicators: usize) -> Self {
        Self {
            ops: Vec::new(),
            track_width: 1000.0,
            viewport_width: 1000.0,
            offset: None,
            transition: true,
            slides: vec![false; slides],
            indicators: vec![false; indicators],
            previous_enabled: None,
            next_enabled: None,
        }
    }

    /// Override the reported track and viewport widths.
    pub fn with_widths(mut self, track_width: f64, viewport_width: f64) -> Self {
        self.track_width = track_width;
        self.viewport_width = viewport_width;
        self
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded calls while keeping the accumulated state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Last applied offset, if any.
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition
    }

    /// Indices of slides currently marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        active_indices(&self.slides)
    }

    /// Indices of indicators currently marked active.
    pub fn active_indicators(&self) -> Vec<usize> {
        active_indices(&self.indicators)
    }

    pub fn previous_enabled(&self) -> Option<bool> {
        self.previous_enabled
    }

    pub fn next_enabled(&self) -> Option<bool> {
        self.next_enabled
    }
}

fn active_indices(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, active)| **active)
        .map(|(i, _)| i)
        .collect()
}

impl TrackSurface for RecordingSurface {
    fn set_offset(&mut self, percent: f64) {
        self.offset = Some(percent);
        self.ops.push(SurfaceOp::Offset(percent));
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
        self.ops.push(SurfaceOp::Transition(enabled));
    }

    fn track_width(&self) -> f64 {
        self.track_width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn set_slide_active(&mut self, index: usize, active: bool, delay: Duration) {
        if let Some(flag) = self.slides.get_mut(index) {
            *flag = active;
        }
        self.ops.push(SurfaceOp::SlideActive {
            index,
            active,
            delay,
        });
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.indicators.get_mut(index) {
            *flag = active;
        }
        self.ops.push(SurfaceOp::IndicatorActive { index, active });
    }

    fn set_previous_enabled(&mut self, enabled: bool) {
        self.previous_enabled = Some(enabled);
        self.ops.push(SurfaceOp::PreviousEnabled(enabled));
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = Some(enabled);
        self.ops.push(SurfaceOp::NextEnabled(enabled));
    }
}
