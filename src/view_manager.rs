use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::config::ViewConfig;
use crate::core::clock::Clock;
use crate::core::input_adapter::PointerEvent;
use crate::input::{InputState, KeyboardPoll};
use crate::projection::{ProjectionMode, ProjectionSettings};
use crate::traits::{
    ShaderUniforms, ViewportWindow, WindowDimensions, PROJECTION_UNIFORM, VIEW_POSITION_UNIFORM,
    VIEW_UNIFORM,
};

/// Matrices uploaded for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_position: Vec3,
    pub delta: f32,
}

/// Owns the camera and drives it from window input, once per frame.
pub struct ViewManager {
    camera: Camera,
    input: InputState,
    keyboard: KeyboardPoll,
    clock: Clock,
    projection_mode: ProjectionMode,
    projection: ProjectionSettings,
    fallback_aspect: f32,
}

impl ViewManager {
    pub fn new(config: &ViewConfig) -> Self {
        let dimensions = config.window.dimensions();
        Self {
            camera: config.camera.build(),
            input: InputState::new(dimensions.center(), config.input.speed_limits()),
            keyboard: KeyboardPoll::default(),
            clock: Clock::new(),
            projection_mode: config.initial_projection,
            projection: config.projection,
            fallback_aspect: dimensions.aspect_ratio().unwrap_or(1.0),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.input.speed_multiplier()
    }

    /// Cursor callback: turn the camera by the offset from the last sample
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let (x_offset, y_offset) = self.input.cursor_moved(x, y);
        self.camera.process_mouse_movement(x_offset, y_offset);
    }

    /// Relative motion callback, used while the cursor is captured
    pub fn on_mouse_motion(&mut self, dx: f32, dy: f32) {
        let (x_offset, y_offset) = self.input.cursor_moved_by(dx, dy);
        self.camera.process_mouse_movement(x_offset, y_offset);
    }

    /// Scroll callback: adjusts traversal speed, not zoom
    pub fn on_scroll(&mut self, y_offset: f32) {
        let speed = self.input.scrolled(y_offset);
        log::debug!("Camera speed multiplier {:.1}", speed);
    }

    /// Re-arm first-sample handling so the next cursor position does not jump
    pub fn reset_cursor(&mut self) {
        self.input.reset_cursor();
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::CursorMoved { x, y } => self.on_cursor_moved(x, y),
            PointerEvent::Motion { dx, dy } => self.on_mouse_motion(dx, dy),
            PointerEvent::Scrolled { y_offset } => self.on_scroll(y_offset),
            PointerEvent::CursorReentered => self.reset_cursor(),
        }
    }

    /// Poll the keyboard once and apply it to the camera
    pub fn process_keyboard_events(&mut self, window: &mut impl ViewportWindow, delta: f32) {
        let commands = self.keyboard.poll(&*window);

        if commands.close_requested {
            log::info!("Escape pressed, closing window");
            window.request_close();
        }

        let amount = self.input.speed_multiplier() * delta;
        for movement in commands.movements {
            self.camera.process_keyboard(movement, amount);
        }

        if commands.toggle_projection {
            self.projection_mode = self.projection_mode.toggled();
            log::debug!("Projection mode {:?}", self.projection_mode);
        }
    }

    /// Projection matrix for the current mode and window size
    pub fn projection_matrix(&self, dimensions: WindowDimensions) -> Mat4 {
        let aspect = dimensions.aspect_ratio().unwrap_or(self.fallback_aspect);
        self.projection
            .matrix(self.projection_mode, self.camera.zoom(), aspect)
    }

    /// Run one frame: tick, poll keys, build matrices, upload them.
    pub fn prepare_scene_view(
        &mut self,
        window: &mut impl ViewportWindow,
        shader: &mut impl ShaderUniforms,
    ) -> FrameMatrices {
        let delta = self.clock.tick();
        self.prepare_scene_view_with_delta(window, shader, delta)
    }

    /// [`ViewManager::prepare_scene_view`] with an externally measured frame delta
    pub fn prepare_scene_view_with_delta(
        &mut self,
        window: &mut impl ViewportWindow,
        shader: &mut impl ShaderUniforms,
        delta: f32,
    ) -> FrameMatrices {
        let delta = delta.max(0.0);
        self.process_keyboard_events(window, delta);

        let projection = self.projection_matrix(window.dimensions());
        let view = self.camera.view_matrix();
        let view_position = self.camera.position();

        shader.set_mat4(VIEW_UNIFORM, view);
        shader.set_mat4(PROJECTION_UNIFORM, projection);
        shader.set_vec3(VIEW_POSITION_UNIFORM, view_position);

        log::trace!(
            "Frame delta {:.4}s, position {:?}, {:?}",
            delta,
            view_position,
            self.projection_mode
        );

        FrameMatrices {
            view,
            projection,
            view_position,
            delta,
        }
    }
}
