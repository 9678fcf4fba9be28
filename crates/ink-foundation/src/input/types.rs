use ink_graphics::Point;

/// Identifier assigned by the input system to one physical contact.
///
/// Ids are reused once the contact is released.
pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// First pointer of a gesture went down.
    Down,
    /// An additional pointer went down while others are active.
    PointerDown,
    Move,
    /// A non-last pointer went up.
    PointerUp,
    /// The last active pointer went up.
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down | PointerEventKind::PointerDown => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::PointerUp | PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// Snapshot of every active pointer at one input event.
///
/// For `PointerUp`/`Up` the releasing pointer is still part of the snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionEvent {
    pub kind: PointerEventKind,
    /// Index into `pointers` of the pointer that caused the event.
    pub action_index: usize,
    pointers: Vec<PointerSample>,
}

impl MotionEvent {
    pub fn new(kind: PointerEventKind, action_index: usize, pointers: Vec<PointerSample>) -> Self {
        Self {
            kind,
            action_index,
            pointers,
        }
    }

    /// Convenience for a single pointer event.
    pub fn single(kind: PointerEventKind, id: PointerId, position: Point) -> Self {
        Self::new(kind, 0, vec![PointerSample::new(id, position)])
    }

    pub fn phase(&self) -> PointerPhase {
        self.kind.phase()
    }

    pub fn pointers(&self) -> &[PointerSample] {
        &self.pointers
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointers.get(self.action_index)
    }

    pub fn action_pointer_id(&self) -> Option<PointerId> {
        self.action_pointer().map(|sample| sample.id)
    }

    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|sample| sample.id == id)
            .map(|sample| sample.position)
    }

    /// `(id, position)` pairs in snapshot order.
    pub fn samples(&self) -> impl Iterator<Item = (PointerId, Point)> + '_ {
        self.pointers.iter().map(|sample| (sample.id, sample.position))
    }
}
