use std::fmt;
use std::str::FromStr;

use ink_foundation::MotionEvent;

use crate::multitouch::MultiTouchSurface;
use crate::pen::PenSurface;
use crate::segment::Segment;

/// A clearable surface that turns pointer input into ink segments.
pub trait DrawingSurface {
    /// Applies one input event. Returns `true` when the surface should be
    /// redrawn.
    fn on_motion_event(&mut self, event: &MotionEvent) -> bool;

    /// Removes every stroke.
    fn clear(&mut self);

    /// Segments to render, oldest first.
    fn segments(&self) -> &[Segment];

    fn kind(&self) -> SurfaceKind;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Pen,
    #[default]
    MultiTouch,
}

impl SurfaceKind {
    pub fn create(self) -> Box<dyn DrawingSurface> {
        match self {
            SurfaceKind::Pen => Box::new(PenSurface::new()),
            SurfaceKind::MultiTouch => Box::new(MultiTouchSurface::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Pen => "pen",
            SurfaceKind::MultiTouch => "multi-touch",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSurfaceKindError {
    name: String,
}

impl fmt::Display for ParseSurfaceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown surface kind `{}`; expected `pen` or `multi-touch`",
            self.name
        )
    }
}

impl std::error::Error for ParseSurfaceKindError {}

impl FromStr for SurfaceKind {
    type Err = ParseSurfaceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" | "single" => Ok(SurfaceKind::Pen),
            "multi-touch" | "multitouch" | "multi" => Ok(SurfaceKind::MultiTouch),
            _ => Err(ParseSurfaceKindError { name: s.to_string() }),
        }
    }
}
