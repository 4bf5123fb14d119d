//! Drag-to-swipe gesture recognizer.
//!
//! Two states: idle and dragging. The recognizer only does the arithmetic;
//! the controller decides which slide a finished swipe lands on.

/// Direction a finished drag asks the carousel to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Pointer travelled right-to-left past the threshold.
    Forward,
    /// Pointer travelled left-to-right past the threshold.
    Backward,
    /// Threshold not crossed; snap back.
    Stay,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer x when the drag began.
        start_x: f64,
        /// Track offset (percent) at the start of the drag.
        base_offset: f64,
    },
}

impl DragGesture {
    /// Enter the dragging state from slide `current_index`.
    pub fn begin(&mut self, pointer_x: f64, current_index: usize) {
        *self = DragGesture::Dragging {
            start_x: pointer_x,
            base_offset: current_index as f64 * -100.0,
        };
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Pointer x captured at drag start, if dragging.
    pub fn start_x(&self) -> Option<f64> {
        match self {
            DragGesture::Dragging { start_x, .. } => Some(*start_x),
            DragGesture::Idle => None,
        }
    }

    /// Base offset captured at drag start, if dragging.
    pub fn base_offset(&self) -> Option<f64> {
        match self {
            DragGesture::Dragging { base_offset, .. } => Some(*base_offset),
            DragGesture::Idle => None,
        }
    }

    /// Live track offset for a pointer at `pointer_x`.
    ///
    /// The offset is `base - delta`, where `delta` is the pointer travel in
    /// percent of track width. A non-positive track width yields no travel.
    /// Returns `None` when idle.
    pub fn track(&self, pointer_x: f64, track_width: f64) -> Option<f64> {
        let DragGesture::Dragging {
            start_x,
            base_offset,
        } = *self
        else {
            return None;
        };

        let delta_percent = if track_width > 0.0 {
            (pointer_x - start_x) / track_width * 100.0
        } else {
            0.0
        };

        Some(base_offset - delta_percent)
    }

    /// Finish the drag at `pointer_x` and classify it.
    ///
    /// `threshold` is an absolute distance; a swipe must travel strictly
    /// further than it to count. Returns `None` (and stays idle) when no
    /// drag was in progress.
    pub fn finish(&mut self, pointer_x: f64, threshold: f64) -> Option<SwipeIntent> {
        let start_x = self.start_x()?;
        *self = DragGesture::Idle;

        let diff = start_x - pointer_x;
        let intent = if diff.abs() > threshold {
            if diff > 0.0 {
                SwipeIntent::Forward
            } else {
                SwipeIntent::Backward
            }
        } else {
            SwipeIntent::Stay
        };

        Some(intent)
    }
}
