use ink_core::{DrawingSurface, MultiTouchSurface, PenSurface};
use ink_foundation::ActivePointers;
use ink_graphics::{Color, Point};
use ink_render_common::{paint_surface, RenderStyle};
use ink_testing::{points, CanvasOp, RecordingCanvas};

#[test]
fn background_is_painted_before_segments() {
    let mut pointers = ActivePointers::new();
    let mut surface = MultiTouchSurface::new();
    surface.on_motion_event(&pointers.press(1, Point::new(0.0, 0.0)));
    surface.on_motion_event(&pointers.press(2, Point::new(4.0, 4.0)));
    surface.on_motion_event(
        &pointers
            .move_pointers([(1, Point::new(1.0, 0.0)), (2, Point::new(4.0, 5.0))])
            .expect("active"),
    );

    let style = RenderStyle::default();
    let mut canvas = RecordingCanvas::default();
    paint_surface(&surface, &style, &mut canvas);

    assert_eq!(
        canvas.ops(),
        &[
            CanvasOp::Fill(Color::WHITE),
            CanvasOp::Polyline {
                points: points(&[(0.0, 0.0), (1.0, 0.0)]),
                style: style.stroke,
            },
            CanvasOp::Polyline {
                points: points(&[(4.0, 4.0), (4.0, 5.0)]),
                style: style.stroke,
            },
        ]
    );
}

#[test]
fn empty_surface_only_fills() {
    let surface = PenSurface::new();
    let style = RenderStyle::default().with_background(Color::BLACK);
    let mut canvas = RecordingCanvas::default();
    paint_surface(&surface, &style, &mut canvas);
    assert_eq!(canvas.ops(), &[CanvasOp::Fill(Color::BLACK)]);
}
