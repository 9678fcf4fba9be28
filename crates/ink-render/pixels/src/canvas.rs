use std::fmt;

use ink_graphics::{Color, Point, Rect, StrokeStyle};
use ink_render_common::Canvas;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::SizeMismatch { expected, actual } => write!(
                f,
                "frame holds {actual} bytes; expected {expected} for the given size"
            ),
        }
    }
}

impl std::error::Error for FrameError {}

/// [`Canvas`] over a borrowed RGBA8 frame.
///
/// Polylines are drawn with round joins and caps by testing each pixel
/// center against the distance to the nearest edge.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    scale: f32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if frame.len() != expected {
            return Err(FrameError::SizeMismatch {
                expected,
                actual: frame.len(),
            });
        }
        Ok(Self {
            frame,
            width,
            height,
            scale: 1.0,
        })
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.frame[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn blend(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let dst = &mut self.frame[offset..offset + BYTES_PER_PIXEL];
        match rgba[3] {
            255 => dst.copy_from_slice(&rgba),
            0 => {}
            alpha => {
                let a = alpha as u32;
                for channel in 0..3 {
                    let src = rgba[channel] as u32;
                    let old = dst[channel] as u32;
                    dst[channel] = ((src * a + old * (255 - a)) / 255) as u8;
                }
                dst[3] = dst[3].max(alpha);
            }
        }
    }

    /// Covers every pixel whose center lies within `radius` of the edge `a`-`b`.
    fn stroke_edge(&mut self, a: Point, b: Point, radius: f32, rgba: [u8; 4]) {
        let Some(bounds) = Rect::bounding([a, b]).map(|rect| rect.inflate(radius)) else {
            return;
        };
        let min_x = bounds.x.floor().max(0.0) as u32;
        let min_y = bounds.y.floor().max(0.0) as u32;
        let max_x = bounds.right().ceil().min(self.width as f32);
        let max_y = bounds.bottom().ceil().min(self.height as f32);
        if max_x <= 0.0 || max_y <= 0.0 {
            return;
        }
        let (max_x, max_y) = (max_x as u32, max_y as u32);
        let radius_sq = radius * radius;
        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_edge(center, a, b) <= radius_sq {
                    self.blend(x, y, rgba);
                }
            }
        }
    }
}

fn distance_sq_to_edge(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let nearest = a.lerp(b, t);
    let (ex, ey) = (p.x - nearest.x, p.y - nearest.y);
    ex * ex + ey * ey
}

impl Canvas for FrameCanvas<'_> {
    fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for pixel in self.frame.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        let radius = (style.width * self.scale * 0.5).max(0.5);
        let rgba = style.color.to_rgba8();
        let scaled: Vec<Point> = points.iter().map(|p| p.scale(self.scale)).collect();
        match scaled.as_slice() {
            [] => {}
            [single] => self.stroke_edge(*single, *single, radius, rgba),
            _ => {
                for edge in scaled.windows(2) {
                    self.stroke_edge(edge[0], edge[1], radius, rgba);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/canvas_tests.rs"]
mod tests;
