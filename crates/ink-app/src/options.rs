use ink_core::SurfaceKind;
use ink_graphics::StrokeStyle;
use ink_render_common::RenderStyle;

use crate::{run_pixels_app, InkAppError};

/// Builder used to configure and launch an ink application.
#[derive(Debug, Clone, Default)]
pub struct InkAppBuilder {
    options: InkAppOptions,
}

impl InkAppBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title for the application.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Sets the initial logical size of the application window.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.options = self.options.with_size(width, height);
        self
    }

    /// Selects the drawing surface variant.
    pub fn surface(mut self, kind: SurfaceKind) -> Self {
        self.options = self.options.with_surface_kind(kind);
        self
    }

    /// Sets the paint used for strokes.
    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.options.style = self.options.style.with_stroke(stroke);
        self
    }

    /// Returns the options collected so far.
    pub fn options(&self) -> &InkAppOptions {
        &self.options
    }

    /// Opens the window and runs the event loop until it exits.
    pub fn run(self) -> Result<(), InkAppError> {
        run_pixels_app(self.options)
    }
}

/// Options used to configure the ink application window.
#[derive(Debug, Clone)]
pub struct InkAppOptions {
    title: String,
    initial_size: (u32, u32),
    surface_kind: SurfaceKind,
    style: RenderStyle,
}

impl Default for InkAppOptions {
    fn default() -> Self {
        Self {
            title: "Ink".to_string(),
            initial_size: (800, 600),
            surface_kind: SurfaceKind::default(),
            style: RenderStyle::default(),
        }
    }
}

impl InkAppOptions {
    /// Sets the title used for the application window.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Sets the drawing surface variant.
    pub fn with_surface_kind(mut self, kind: SurfaceKind) -> Self {
        self.surface_kind = kind;
        self
    }

    /// Sets background and stroke paint.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Initial window size in logical pixels.
    pub fn initial_size(&self) -> (u32, u32) {
        self.initial_size
    }

    /// Drawing surface variant.
    pub fn surface_kind(&self) -> SurfaceKind {
        self.surface_kind
    }

    /// Background and stroke paint.
    pub fn style(&self) -> RenderStyle {
        self.style
    }
}
