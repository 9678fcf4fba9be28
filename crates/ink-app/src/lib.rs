#![deny(missing_docs)]

//! High level utilities for running ink views in a desktop window.

#[cfg(not(feature = "desktop"))]
compile_error!("ink-app must be built with the `desktop` feature enabled.");

#[cfg(not(feature = "renderer-pixels"))]
compile_error!("ink-app currently requires the `renderer-pixels` feature.");

mod error;
mod options;

pub use error::InkAppError;
pub use ink_core::SurfaceKind;
pub use ink_graphics::{Color, StrokeStyle};
pub use ink_render_common::RenderStyle;
pub use options::{InkAppBuilder, InkAppOptions};

use ink_app_shell::InkShell;
use ink_platform_desktop_winit::DesktopWinitPlatform;
use ink_render_pixels::PixelsRenderer;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Launches an ink application using the default options.
pub fn ink_app() -> Result<(), InkAppError> {
    InkAppBuilder::default().run()
}

/// Launches an ink application using the provided options.
pub fn ink_app_with_options(options: InkAppOptions) -> Result<(), InkAppError> {
    run_pixels_app(options)
}

pub(crate) fn run_pixels_app(options: InkAppOptions) -> Result<(), InkAppError> {
    let event_loop = EventLoop::new();

    let (initial_width, initial_height) = options.initial_size();
    let window = WindowBuilder::new()
        .with_title(options.title())
        .with_inner_size(LogicalSize::new(
            initial_width as f64,
            initial_height as f64,
        ))
        .build(&event_loop)
        .map_err(InkAppError::Window)?;

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels =
        Pixels::new(size.width, size.height, surface_texture).map_err(InkAppError::Pixels)?;

    let mut platform = DesktopWinitPlatform::new(window.scale_factor());
    let mut renderer = PixelsRenderer::new(options.style());
    renderer.set_scale_factor(window.scale_factor() as f32);
    let mut app = InkShell::with_kind(options.surface_kind(), options.style());
    app.set_buffer_size(size.width, size.height);
    let logical = size.to_logical::<f32>(window.scale_factor());
    app.set_viewport(logical.width, logical.height);

    log::info!(
        "window {}x{} at scale {}",
        size.width,
        size.height,
        window.scale_factor()
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    app.set_buffer_size(new_size.width, new_size.height);
                    let logical = new_size.to_logical::<f32>(platform.scale_factor());
                    app.set_viewport(logical.width, logical.height);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                } => {
                    platform.set_scale_factor(scale_factor);
                    renderer.set_scale_factor(scale_factor as f32);
                    if let Err(err) =
                        pixels.resize_surface(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) =
                        pixels.resize_buffer(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    app.set_buffer_size(new_inner_size.width, new_inner_size.height);
                    let logical = new_inner_size.to_logical::<f32>(scale_factor);
                    app.set_viewport(logical.width, logical.height);
                    window.request_redraw();
                }
                WindowEvent::Touch(touch) => {
                    if let Some(motion) = platform.touch_event(&touch) {
                        app.dispatch(&motion);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let Some(motion) = platform.cursor_moved(position) {
                        app.dispatch(&motion);
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if let Some(motion) = platform.cursor_left() {
                        app.dispatch(&motion);
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    let motion = match state {
                        ElementState::Pressed => platform.mouse_pressed(),
                        ElementState::Released => platform.mouse_released(),
                    };
                    if let Some(motion) = motion {
                        app.dispatch(&motion);
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::C | VirtualKeyCode::Back) => app.clear(),
                        Some(VirtualKeyCode::D) => app.log_debug_info(),
                        Some(VirtualKeyCode::P) => app.set_surface_kind(SurfaceKind::Pen),
                        Some(VirtualKeyCode::M) => {
                            app.set_surface_kind(SurfaceKind::MultiTouch)
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if app.should_render() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let (buffer_width, buffer_height) = app.buffer_size();
                let frame = pixels.frame_mut();
                if let Err(err) = renderer.draw(frame, buffer_width, buffer_height, app.surface())
                {
                    log::error!("failed to draw ink: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                app.mark_rendered();
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
