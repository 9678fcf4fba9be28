use ink_core::{DrawingSurface, SurfaceKind};
use ink_foundation::MotionEvent;
use ink_graphics::Size;
use ink_render_common::{paint_surface, Canvas, RenderStyle};

/// Owns the active drawing surface and turns input into redraw requests.
///
/// Events are handled one at a time on the thread that owns the shell;
/// every handled event that changes the surface marks the frame dirty.
pub struct InkShell {
    surface: Box<dyn DrawingSurface>,
    style: RenderStyle,
    viewport: Size,
    buffer_size: (u32, u32),
    needs_redraw: bool,
    events_handled: u64,
}

impl InkShell {
    pub fn new(surface: Box<dyn DrawingSurface>, style: RenderStyle) -> Self {
        log::info!("ink shell started with {} surface", surface.kind());
        Self {
            surface,
            style,
            viewport: Size::new(800.0, 600.0),
            buffer_size: (800, 600),
            needs_redraw: true,
            events_handled: 0,
        }
    }

    pub fn with_kind(kind: SurfaceKind, style: RenderStyle) -> Self {
        Self::new(kind.create(), style)
    }

    pub fn surface(&self) -> &dyn DrawingSurface {
        self.surface.as_ref()
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Swaps in a fresh surface of `kind`, dropping existing strokes.
    pub fn set_surface_kind(&mut self, kind: SurfaceKind) {
        if self.surface.kind() != kind {
            log::info!("switching surface {} -> {kind}", self.surface.kind());
            self.surface = kind.create();
            self.needs_redraw = true;
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.needs_redraw = true;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
        self.needs_redraw = true;
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    pub fn dispatch(&mut self, event: &MotionEvent) {
        self.events_handled += 1;
        log::trace!(
            "{:?} pointer {:?} ({} active)",
            event.kind,
            event.action_pointer_id(),
            event.pointer_count()
        );
        if self.surface.on_motion_event(event) {
            self.needs_redraw = true;
        }
    }

    pub fn clear(&mut self) {
        self.surface.clear();
        self.needs_redraw = true;
    }

    pub fn should_render(&self) -> bool {
        self.needs_redraw
    }

    /// Paints the surface and marks the frame clean.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        paint_surface(self.surface.as_ref(), &self.style, canvas);
        self.needs_redraw = false;
    }

    /// Marks the frame clean after a backend drew it without going through
    /// [`InkShell::render`].
    pub fn mark_rendered(&mut self) {
        self.needs_redraw = false;
    }

    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    pub fn log_debug_info(&self) {
        let segments = self.surface.segments();
        log::info!("════════════════════════════════════════════════════════");
        log::info!("           DEBUG: CURRENT SURFACE STATE");
        log::info!("════════════════════════════════════════════════════════");
        log::info!(
            "{} surface, viewport {}x{}, {} events handled",
            self.surface.kind(),
            self.viewport.width,
            self.viewport.height,
            self.events_handled
        );
        log::info!(
            "{} segments, {} points",
            segments.len(),
            segments.iter().map(|s| s.len()).sum::<usize>()
        );
        for (index, segment) in segments.iter().enumerate() {
            match segment.bounds() {
                Some(bounds) => log::info!(
                    "  #{index} pointer {} points {} bounds ({:.1}, {:.1}) {:.1}x{:.1}",
                    segment.pointer_id(),
                    segment.len(),
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height
                ),
                None => log::info!("  #{index} pointer {} empty", segment.pointer_id()),
            }
        }
    }
}
