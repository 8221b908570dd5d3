use super::controller::Controller;

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a degenerate (minimised) window
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }

    /// Centre of the window, where the cursor is assumed to start
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// The window a viewport is attached to.
///
/// Key state is queried synchronously once per frame through the
/// [`Controller`] supertrait.
pub trait ViewportWindow: Controller {
    /// Current window dimensions
    fn dimensions(&self) -> WindowDimensions;

    /// Ask the window to close at the end of the current frame
    fn request_close(&mut self);
}
