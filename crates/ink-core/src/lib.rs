//! Stroke tracking for ink views.
//!
//! A [`StrokeTracker`] records every stroke drawn on a surface as a
//! [`Segment`] tagged with the pointer that produced it. The
//! [`DrawingSurface`] trait is the capability shared by the single pen
//! ([`PenSurface`]) and the multi-pointer ([`MultiTouchSurface`]) views.

mod collections;
mod multitouch;
mod pen;
mod segment;
mod surface;
mod tracker;

pub use multitouch::MultiTouchSurface;
pub use pen::{PenSurface, PEN_POINTER_ID};
pub use segment::Segment;
pub use surface::{DrawingSurface, ParseSurfaceKindError, SurfaceKind};
pub use tracker::StrokeTracker;

pub use ink_foundation::{MotionEvent, PointerEventKind, PointerId};
pub use ink_graphics::Point;

pub mod prelude {
    pub use crate::{DrawingSurface, Segment, StrokeTracker, SurfaceKind};
}
