//! Review carousel: slide index state, drag-to-swipe, auto-advance.

mod controller;
mod frame;
mod gesture;
mod surface;
mod timer;

pub use controller::{
    Carousel, CarouselSettings, DEFAULT_STAGGER, DEFAULT_SWIPE_THRESHOLD,
};
pub use frame::{FrameQueue, FrameTask};
pub use gesture::{DragGesture, SwipeIntent};
pub use surface::{RecordingSurface, SurfaceOp, TrackSurface};
pub use timer::{AutoAdvance, DEFAULT_AUTO_ADVANCE};
