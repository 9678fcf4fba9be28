//! Common rendering contracts shared between renderer backends.

use ink_core::DrawingSurface;
use ink_graphics::{Color, Point, StrokeStyle};

/// Drawing target implemented by renderer backends.
pub trait Canvas {
    /// Paints the whole target with `color`.
    fn fill(&mut self, color: Color);

    /// Draws `points` as a connected polyline.
    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle);
}

/// Paint owned by the renderer; surfaces only provide geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub stroke: StrokeStyle,
}

impl RenderStyle {
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            stroke: StrokeStyle::default(),
        }
    }
}

/// Clears `canvas` and draws every segment of `surface`, oldest first.
pub fn paint_surface(surface: &dyn DrawingSurface, style: &RenderStyle, canvas: &mut dyn Canvas) {
    canvas.fill(style.background);
    for segment in surface.segments() {
        canvas.draw_polyline(segment.points(), &style.stroke);
    }
}
