use glam::{Mat4, Vec3};

/// Uniform name of the camera view matrix
pub const VIEW_UNIFORM: &str = "view";
/// Uniform name of the projection matrix
pub const PROJECTION_UNIFORM: &str = "projection";
/// Uniform name of the camera position in world space
pub const VIEW_POSITION_UNIFORM: &str = "viewPosition";

/// Shader program accepting named uniform uploads
pub trait ShaderUniforms {
    /// Upload a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: Mat4);

    /// Upload a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);
}
