use ink_foundation::PointerId;
use ink_graphics::{Point, Rect};

/// One continuous stroke, from a pointer going down until it goes up.
///
/// Points are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pointer_id: PointerId,
    points: Vec<Point>,
}

impl Segment {
    pub(crate) fn new(pointer_id: PointerId, start: Point) -> Self {
        Self {
            pointer_id,
            points: vec![start],
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.points.iter().copied())
    }
}
