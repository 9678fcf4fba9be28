//! Translates winit touch and mouse input into ink [`MotionEvent`]s.

use ink_foundation::{ActivePointers, MotionEvent, PointerId};
use ink_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase};

/// Pointer id used for the left mouse button; chosen outside the range
/// winit hands out for touches.
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    pointers: ActivePointers,
    cursor: Point,
    mouse_down: bool,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            pointers: ActivePointers::new(),
            cursor: Point::ZERO,
            mouse_down: false,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn active_pointers(&self) -> &ActivePointers {
        &self.pointers
    }

    pub fn touch_event(&mut self, touch: &Touch) -> Option<MotionEvent> {
        self.touch(touch.id, touch.phase, touch.location)
    }

    /// A cancelled finger is treated as lifted so its stroke stays intact
    /// and the remaining fingers keep drawing.
    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> Option<MotionEvent> {
        let position = self.pointer_position(location);
        let event = match phase {
            TouchPhase::Started => Some(self.pointers.press(id, position)),
            TouchPhase::Moved => self.pointers.move_pointer(id, position),
            TouchPhase::Ended | TouchPhase::Cancelled => self.pointers.release(id),
        };
        if event.is_none() {
            log::debug!("ignoring {phase:?} for inactive touch {id}");
        }
        event
    }

    /// Returns a `Move` while the left button is held.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<MotionEvent> {
        self.cursor = self.pointer_position(position);
        if !self.mouse_down {
            return None;
        }
        self.pointers.move_pointer(MOUSE_POINTER_ID, self.cursor)
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn mouse_pressed(&mut self) -> Option<MotionEvent> {
        if self.mouse_down {
            return None;
        }
        self.mouse_down = true;
        Some(self.pointers.press(MOUSE_POINTER_ID, self.cursor))
    }

    pub fn mouse_released(&mut self) -> Option<MotionEvent> {
        if !self.mouse_down {
            return None;
        }
        self.mouse_down = false;
        self.pointers.release(MOUSE_POINTER_ID)
    }

    /// Releases the mouse when the cursor leaves the window mid-stroke.
    pub fn cursor_left(&mut self) -> Option<MotionEvent> {
        self.mouse_released()
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
