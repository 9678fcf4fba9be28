//! Foundation elements for ink views: the pointer input model delivered by
//! the host platform.

pub mod input;

pub use input::*;

pub mod prelude {
    pub use crate::input::{
        ActivePointers, MotionEvent, PointerEventKind, PointerId, PointerPhase, PointerSample,
    };
}
