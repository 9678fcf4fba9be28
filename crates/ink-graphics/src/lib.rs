//! Pure math/data for drawing ink strokes
//!
//! This crate contains the geometry primitives, colors and stroke styles
//! shared by the input, core and rendering crates.

mod color;
mod geometry;
mod stroke;

pub use color::*;
pub use geometry::*;
pub use stroke::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::stroke::StrokeStyle;
}
