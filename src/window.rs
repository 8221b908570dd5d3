use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event::{DeviceEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::config::WindowConfig;
use crate::core::input_adapter::{LookSource, PointerEvent, WinitController};
use crate::traits::{Button, Controller, ViewportWindow, WindowDimensions};

/// Create the display window; [`WinitViewport::new`] captures its cursor
pub fn create_display_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Arc<WinitWindow>> {
    let window = event_loop
        .create_window(
            WinitWindow::default_attributes()
                .with_title(config.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height)),
        )
        .with_context(|| format!("Failed to create window {:?}", config.title))?;

    log::info!(
        "Created window {:?} ({}x{})",
        config.title,
        config.width,
        config.height
    );
    Ok(Arc::new(window))
}

/// Hide and capture the cursor, picking the look source that still works.
///
/// A captured cursor stops at (or never leaves) its position, so look is
/// driven by raw device motion. Without capture, cursor positions are used.
fn capture_cursor(window: &WinitWindow) -> LookSource {
    window.set_cursor_visible(false);
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    match grabbed {
        Ok(()) => LookSource::RawMotion,
        Err(err) => {
            log::warn!("Cursor capture is not supported on this platform: {}", err);
            LookSource::CursorPosition
        }
    }
}

/// winit-backed window the viewport polls keys from
pub struct WinitViewport {
    inner: Arc<WinitWindow>,
    controller: WinitController,
    close_requested: bool,
}

impl WinitViewport {
    /// Wrap `window`, capturing its cursor
    pub fn new(window: Arc<WinitWindow>) -> Self {
        let mut controller = WinitController::new();
        controller.set_scale_factor(window.scale_factor());
        let look_source = capture_cursor(&window);
        controller.set_look_source(look_source);
        log::debug!("Mouse look source {:?}", look_source);

        Self {
            inner: window,
            controller,
            close_requested: false,
        }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Update key state; pointer events are handed back to the caller
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        self.controller.process_event(event)
    }

    pub fn process_device_event(&mut self, event: &DeviceEvent) -> Option<PointerEvent> {
        self.controller.process_device_event(event)
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

impl Controller for WinitViewport {
    fn is_down(&self, button: Button) -> bool {
        self.controller.is_down(button)
    }
}

impl ViewportWindow for WinitViewport {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }
}
