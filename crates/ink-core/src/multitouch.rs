use ink_foundation::{MotionEvent, PointerEventKind};

use crate::segment::Segment;
use crate::surface::{DrawingSurface, SurfaceKind};
use crate::tracker::StrokeTracker;

/// Surface drawing one segment per finger.
#[derive(Debug, Default)]
pub struct MultiTouchSurface {
    tracker: StrokeTracker,
}

impl MultiTouchSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }

    fn on_down(&mut self, event: &MotionEvent) -> bool {
        match event.action_pointer() {
            Some(sample) => {
                self.tracker.begin(sample.id, sample.position);
                true
            }
            None => {
                log::warn!(
                    "{:?} with action index {} outside of {} pointers",
                    event.kind,
                    event.action_index,
                    event.pointer_count()
                );
                false
            }
        }
    }

    fn on_move(&mut self, event: &MotionEvent) -> bool {
        let extended = self.tracker.extend(event.samples());
        log::trace!("move extended {extended}/{} segments", event.pointer_count());
        true
    }

    fn on_up(&mut self, event: &MotionEvent) -> bool {
        if let Some(id) = event.action_pointer_id() {
            self.tracker.end(id);
        }
        true
    }

    fn on_cancel(&mut self, event: &MotionEvent) -> bool {
        for sample in event.pointers() {
            self.tracker.end(sample.id);
        }
        true
    }
}

impl DrawingSurface for MultiTouchSurface {
    fn on_motion_event(&mut self, event: &MotionEvent) -> bool {
        match event.kind {
            PointerEventKind::Down | PointerEventKind::PointerDown => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::PointerUp | PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    fn clear(&mut self) {
        self.tracker.clear();
    }

    fn segments(&self) -> &[Segment] {
        self.tracker.segments()
    }

    fn kind(&self) -> SurfaceKind {
        SurfaceKind::MultiTouch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_foundation::{ActivePointers, PointerSample};
    use ink_graphics::Point;

    #[test]
    fn two_fingers_draw_two_segments() {
        let mut pointers = ActivePointers::new();
        let mut surface = MultiTouchSurface::new();
        let events = [
            pointers.press(0, Point::new(0.0, 0.0)),
            pointers.press(1, Point::new(10.0, 0.0)),
            pointers
                .move_pointers([(0, Point::new(0.0, 1.0)), (1, Point::new(10.0, 1.0))])
                .expect("active"),
            pointers.release(0).expect("active"),
            pointers.move_pointer(1, Point::new(10.0, 2.0)).expect("active"),
            pointers.release(1).expect("active"),
        ];
        for event in &events {
            assert!(surface.on_motion_event(event));
        }

        let segments = surface.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].points(),
            &[Point::new(0.0, 0.0), Point::new(0.0, 1.0)]
        );
        assert_eq!(
            segments[1].points(),
            &[
                Point::new(10.0, 0.0),
                Point::new(10.0, 1.0),
                Point::new(10.0, 2.0)
            ]
        );
    }

    #[test]
    fn lifted_finger_stops_growing() {
        let mut pointers = ActivePointers::new();
        let mut surface = MultiTouchSurface::new();
        surface.on_motion_event(&pointers.press(0, Point::new(0.0, 0.0)));
        surface.on_motion_event(&pointers.press(1, Point::new(5.0, 5.0)));
        surface.on_motion_event(&pointers.release(0).expect("active"));
        surface.on_motion_event(&pointers.move_pointer(1, Point::new(6.0, 6.0)).expect("active"));

        assert_eq!(surface.segments()[0].len(), 1);
        assert_eq!(surface.segments()[1].len(), 2);
    }

    #[test]
    fn invalid_action_index_is_ignored() {
        let mut surface = MultiTouchSurface::new();
        let event = MotionEvent::new(
            PointerEventKind::PointerDown,
            3,
            vec![PointerSample::new(0, Point::ZERO)],
        );
        assert!(!surface.on_motion_event(&event));
        assert!(surface.segments().is_empty());
    }

    #[test]
    fn cancel_keeps_strokes() {
        let mut pointers = ActivePointers::new();
        let mut surface = MultiTouchSurface::new();
        surface.on_motion_event(&pointers.press(0, Point::new(0.0, 0.0)));
        surface.on_motion_event(&pointers.cancel().expect("active"));
        assert_eq!(surface.tracker().len(), 1);
    }
}
