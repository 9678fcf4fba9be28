use indexmap::IndexMap;
use ink_graphics::Point;

use super::types::{MotionEvent, PointerEventKind, PointerId, PointerSample};

/// Table of pointers currently down, in the order they went down.
///
/// Platforms that report contacts one at a time (winit touches, the mouse)
/// feed them through this table to get full snapshots with host style
/// `Down`/`PointerDown`/`Move`/`PointerUp`/`Up` sequencing.
#[derive(Clone, Debug, Default)]
pub struct ActivePointers {
    pointers: IndexMap<PointerId, Point>,
}

impl ActivePointers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.pointers.get(&id).copied()
    }

    /// Registers a new contact. Pressing an id that is already down moves it.
    pub fn press(&mut self, id: PointerId, position: Point) -> MotionEvent {
        if self.pointers.contains_key(&id) {
            if let Some(event) = self.move_pointer(id, position) {
                return event;
            }
        }
        let kind = if self.pointers.is_empty() {
            PointerEventKind::Down
        } else {
            PointerEventKind::PointerDown
        };
        let (index, _) = self.pointers.insert_full(id, position);
        self.snapshot(kind, index)
    }

    pub fn move_pointer(&mut self, id: PointerId, position: Point) -> Option<MotionEvent> {
        let (index, _, slot) = self.pointers.get_full_mut(&id)?;
        *slot = position;
        Some(self.snapshot(PointerEventKind::Move, index))
    }

    /// Updates several pointers at once and emits a single `Move`.
    ///
    /// Unknown ids are ignored; returns `None` when nothing was updated.
    pub fn move_pointers<I>(&mut self, updates: I) -> Option<MotionEvent>
    where
        I: IntoIterator<Item = (PointerId, Point)>,
    {
        let mut first_index = None;
        for (id, position) in updates {
            if let Some((index, _, slot)) = self.pointers.get_full_mut(&id) {
                *slot = position;
                first_index.get_or_insert(index);
            }
        }
        first_index.map(|index| self.snapshot(PointerEventKind::Move, index))
    }

    /// Emits the release event, then forgets the pointer.
    pub fn release(&mut self, id: PointerId) -> Option<MotionEvent> {
        let index = self.pointers.get_index_of(&id)?;
        let kind = if self.pointers.len() == 1 {
            PointerEventKind::Up
        } else {
            PointerEventKind::PointerUp
        };
        let event = self.snapshot(kind, index);
        self.pointers.shift_remove(&id);
        Some(event)
    }

    /// Cancels the whole gesture.
    pub fn cancel(&mut self) -> Option<MotionEvent> {
        if self.pointers.is_empty() {
            return None;
        }
        let event = self.snapshot(PointerEventKind::Cancel, 0);
        self.pointers.clear();
        Some(event)
    }

    fn snapshot(&self, kind: PointerEventKind, action_index: usize) -> MotionEvent {
        let pointers = self
            .pointers
            .iter()
            .map(|(&id, &position)| PointerSample::new(id, position))
            .collect();
        MotionEvent::new(kind, action_index, pointers)
    }
}

#[cfg(test)]
#[path = "tests/pointers_tests.rs"]
mod tests;
