use ink_foundation::PointerId;
use ink_graphics::Point;

use crate::collections::map::HashMap;
use crate::segment::Segment;

/// Ordered record of every segment drawn, attributing motion to the right
/// segment while several pointers are down and ids get reused.
///
/// Segments live in an arena in creation order. `current` maps each pointer
/// id to the newest segment created for it, which is the segment a reverse
/// scan over the arena would find first.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    segments: Vec<Segment>,
    current: HashMap<PointerId, usize>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new segment for `pointer_id` at `point`.
    ///
    /// Earlier segments with the same id become history.
    pub fn begin(&mut self, pointer_id: PointerId, point: Point) {
        let index = self.segments.len();
        self.segments.push(Segment::new(pointer_id, point));
        self.current.insert(pointer_id, index);
        log::debug!(
            "pointer {pointer_id} down at ({}, {}); segment #{index}",
            point.x,
            point.y
        );
    }

    /// Appends each active pointer's position to its newest segment.
    ///
    /// A pointer id is matched at most once per call; ids without a segment
    /// are skipped. Returns how many segments were extended.
    pub fn extend<I>(&mut self, active_pointers: I) -> usize
    where
        I: IntoIterator<Item = (PointerId, Point)>,
    {
        let mut consumed: Vec<PointerId> = Vec::new();
        for (pointer_id, point) in active_pointers {
            if consumed.contains(&pointer_id) {
                continue;
            }
            let Some(&index) = self.current.get(&pointer_id) else {
                log::trace!("pointer {pointer_id} has no segment; skipping");
                continue;
            };
            consumed.push(pointer_id);
            self.segments[index].push(point);
        }
        consumed.len()
    }

    /// Records that `pointer_id` went up.
    ///
    /// The segment is left as is: it stops growing because the pointer no
    /// longer shows up in `extend` snapshots.
    pub fn end(&mut self, pointer_id: PointerId) {
        match self.current.get(&pointer_id) {
            Some(&index) => log::debug!(
                "pointer {pointer_id} up; segment #{index} has {} points",
                self.segments[index].len()
            ),
            None => log::debug!("pointer {pointer_id} up without a segment"),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segment `extend` would append to for `pointer_id`.
    pub fn current(&self, pointer_id: PointerId) -> Option<&Segment> {
        self.current
            .get(&pointer_id)
            .map(|&index| &self.segments[index])
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of points over all segments.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn clear(&mut self) {
        if !self.segments.is_empty() {
            log::debug!("clearing {} segments", self.segments.len());
        }
        self.segments.clear();
        self.current.clear();
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
