//! Software rasterizer drawing ink segments into an RGBA8 frame, such as the
//! frame buffer of a `pixels::Pixels` surface.

mod canvas;

pub use canvas::{FrameCanvas, FrameError};

use ink_core::DrawingSurface;
use ink_render_common::{paint_surface, RenderStyle};

/// Renders a surface into frame buffers with a fixed style.
#[derive(Clone, Debug)]
pub struct PixelsRenderer {
    style: RenderStyle,
    scale: f32,
}

impl PixelsRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style, scale: 1.0 }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Logical to physical pixel ratio applied to stroke geometry.
    pub fn set_scale_factor(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale
    }

    pub fn draw(
        &self,
        frame: &mut [u8],
        width: u32,
        height: u32,
        surface: &dyn DrawingSurface,
    ) -> Result<(), FrameError> {
        draw_surface(frame, width, height, self.scale, surface, &self.style)
    }
}

impl Default for PixelsRenderer {
    fn default() -> Self {
        Self::new(RenderStyle::default())
    }
}

/// Paints `surface` into a `width` x `height` RGBA8 frame.
pub fn draw_surface(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scale: f32,
    surface: &dyn DrawingSurface,
    style: &RenderStyle,
) -> Result<(), FrameError> {
    let mut canvas = FrameCanvas::new(frame, width, height)?.with_scale(scale);
    paint_surface(surface, style, &mut canvas);
    log::trace!(
        "drew {} segments into {width}x{height} frame",
        surface.segments().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_core::MultiTouchSurface;
    use ink_foundation::ActivePointers;
    use ink_graphics::Point;

    #[test]
    fn renderer_draws_surface_strokes() {
        let mut pointers = ActivePointers::new();
        let mut surface = MultiTouchSurface::new();
        surface.on_motion_event(&pointers.press(1, Point::new(1.0, 1.0)));
        surface.on_motion_event(&pointers.move_pointer(1, Point::new(8.0, 1.0)).expect("active"));

        let renderer = PixelsRenderer::default();
        let mut frame = vec![0; 10 * 10 * 4];
        renderer
            .draw(&mut frame, 10, 10, &surface)
            .expect("frame matches size");

        let at = |x: usize, y: usize| &frame[(y * 10 + x) * 4..(y * 10 + x) * 4 + 4];
        assert_eq!(at(4, 1), &[0, 0, 0, 255]);
        assert_eq!(at(4, 9), &[255, 255, 255, 255]);
    }

    #[test]
    fn renderer_reports_size_mismatch() {
        let surface = MultiTouchSurface::new();
        let mut frame = vec![0; 12];
        let result = PixelsRenderer::default().draw(&mut frame, 10, 10, &surface);
        assert!(matches!(result, Err(FrameError::SizeMismatch { .. })));
    }
}
