use std::fmt;

/// Failures while setting up the application window.
#[derive(Debug)]
pub enum InkAppError {
    /// The platform refused to create a window.
    Window(winit::error::OsError),
    /// The pixel buffer could not be created for the window surface.
    Pixels(pixels::Error),
}

impl fmt::Display for InkAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InkAppError::Window(err) => write!(f, "failed to create window: {err}"),
            InkAppError::Pixels(err) => write!(f, "failed to create pixel buffer: {err}"),
        }
    }
}

impl std::error::Error for InkAppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InkAppError::Window(err) => Some(err),
            InkAppError::Pixels(err) => Some(err),
        }
    }
}
