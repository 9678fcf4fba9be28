use ink_core::{DrawingSurface, Segment};
use ink_foundation::{ActivePointers, MotionEvent, PointerId};
use ink_graphics::{Color, Point, StrokeStyle};
use ink_render_common::Canvas;

/// Builds points from `(x, y)` tuples.
pub fn points(coords: &[(f32, f32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// `(pointer id, points)` for every segment, for compact assertions.
pub fn segment_summary(segments: &[Segment]) -> Vec<(PointerId, Vec<Point>)> {
    segments
        .iter()
        .map(|segment| (segment.pointer_id(), segment.points().to_vec()))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    Fill(Color),
    Polyline {
        points: Vec<Point>,
        style: StrokeStyle,
    },
}

/// Canvas that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.ops.iter().filter_map(|op| match op {
            CanvasOp::Polyline { points, .. } => Some(points.as_slice()),
            CanvasOp::Fill(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Color) {
        self.ops.push(CanvasOp::Fill(color));
    }

    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        self.ops.push(CanvasOp::Polyline {
            points: points.to_vec(),
            style: *style,
        });
    }
}

/// Drives a surface with host-ordered pointer events.
///
/// Tracks active pointers so scripts only name the pointer that changes.
pub struct SurfaceHarness<S: DrawingSurface> {
    surface: S,
    pointers: ActivePointers,
    invalidations: usize,
}

impl<S: DrawingSurface> SurfaceHarness<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            pointers: ActivePointers::new(),
            invalidations: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of events after which the surface asked to be redrawn.
    pub fn invalidations(&self) -> usize {
        self.invalidations
    }

    pub fn down(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        let event = self.pointers.press(id, Point::new(x, y));
        self.dispatch(&event)
    }

    pub fn move_to(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        if let Some(event) = self.pointers.move_pointer(id, Point::new(x, y)) {
            self.dispatch(&event);
        }
        self
    }

    /// Moves several pointers in one event.
    pub fn move_all(&mut self, moves: &[(PointerId, f32, f32)]) -> &mut Self {
        let updates = moves.iter().map(|&(id, x, y)| (id, Point::new(x, y)));
        if let Some(event) = self.pointers.move_pointers(updates) {
            self.dispatch(&event);
        }
        self
    }

    pub fn up(&mut self, id: PointerId) -> &mut Self {
        if let Some(event) = self.pointers.release(id) {
            self.dispatch(&event);
        }
        self
    }

    pub fn cancel(&mut self) -> &mut Self {
        if let Some(event) = self.pointers.cancel() {
            self.dispatch(&event);
        }
        self
    }

    /// Sends an arbitrary event, bypassing pointer bookkeeping.
    pub fn dispatch(&mut self, event: &MotionEvent) -> &mut Self {
        if self.surface.on_motion_event(event) {
            self.invalidations += 1;
        }
        self
    }

    pub fn summary(&self) -> Vec<(PointerId, Vec<Point>)> {
        segment_summary(self.surface.segments())
    }
}
