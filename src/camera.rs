use glam::{Mat4, Vec3};

/// Default movement speed in world units per second
pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
/// Default field of view in degrees
pub const DEFAULT_ZOOM: f32 = 45.0;
/// Pitch is kept just under vertical so the look-at basis never flips
pub const PITCH_LIMIT: f32 = 89.0;
/// Yaw and pitch are measured around this axis, so it is fixed
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Direction of a keyboard-driven camera move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First-person camera.
///
/// `front`, `right` and `up` always form an orthonormal basis derived from
/// `yaw` and `pitch` (both in degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
}

impl Camera {
    /// Camera at `position` oriented by `yaw`/`pitch` in degrees
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: DEFAULT_ZOOM,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Camera at `position` looking along `front`, which need not be normalized.
    ///
    /// Yaw and pitch are recovered from the direction so later mouse input
    /// continues smoothly from it. A vertical `front` saturates at the pitch
    /// limit.
    pub fn looking_along(position: Vec3, front: Vec3) -> Self {
        let front = front.normalize_or(Vec3::NEG_Z);
        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front.y.clamp(-1.0, 1.0).asin().to_degrees();
        Self::new(position, yaw, pitch)
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_movement_speed(mut self, movement_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, mouse_sensitivity: f32) -> Self {
        self.mouse_sensitivity = mouse_sensitivity;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        WORLD_UP
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Move along the camera basis by `movement_speed * amount`.
    ///
    /// `amount` is usually the frame delta already scaled by the user's speed
    /// multiplier. Position is unconstrained.
    pub fn process_keyboard(&mut self, direction: CameraMovement, amount: f32) {
        let velocity = self.movement_speed * amount;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.up,
            CameraMovement::Down => -self.up,
        };
        self.position += offset * velocity;
    }

    /// Turn the camera by cursor offsets in pixels
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera_vectors();
    }

    /// Right-handed look-at matrix from the camera position along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_camera_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, -90.0, 0.0)
    }
}
