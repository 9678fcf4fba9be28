use ink_foundation::{MotionEvent, PointerEventKind, PointerId};

use crate::segment::Segment;
use crate::surface::{DrawingSurface, SurfaceKind};
use crate::tracker::StrokeTracker;

/// Pointer id the single pen records its segments under.
pub const PEN_POINTER_ID: PointerId = 0;

/// Surface with a single pen following the primary pointer.
///
/// Each down starts a new sub-path; secondary pointers are ignored.
#[derive(Debug, Default)]
pub struct PenSurface {
    tracker: StrokeTracker,
    pen_down: bool,
}

impl PenSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }
}

impl DrawingSurface for PenSurface {
    fn on_motion_event(&mut self, event: &MotionEvent) -> bool {
        let Some(primary) = event.pointers().first() else {
            return false;
        };
        match event.kind {
            PointerEventKind::Down => {
                self.tracker.begin(PEN_POINTER_ID, primary.position);
                self.pen_down = true;
            }
            PointerEventKind::Move if self.pen_down => {
                self.tracker.extend([(PEN_POINTER_ID, primary.position)]);
            }
            PointerEventKind::Up | PointerEventKind::Cancel if self.pen_down => {
                self.tracker.end(PEN_POINTER_ID);
                self.pen_down = false;
            }
            _ => return false,
        }
        true
    }

    fn clear(&mut self) {
        self.tracker.clear();
    }

    fn segments(&self) -> &[Segment] {
        self.tracker.segments()
    }

    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Pen
    }
}
