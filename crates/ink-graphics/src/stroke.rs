use crate::Color;

/// Fixed paint used to draw every ink segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Width in logical pixels.
    pub width: f32,
}

impl StrokeStyle {
    pub const DEFAULT_WIDTH: f32 = 6.0;

    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: Self::DEFAULT_WIDTH,
        }
    }
}
