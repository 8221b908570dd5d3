use glam::{Mat4, Vec3};

use crate::traits::{ShaderUniforms, PROJECTION_UNIFORM, VIEW_POSITION_UNIFORM, VIEW_UNIFORM};

/// View uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }
}

/// CPU-side uniform block the viewport uploads into.
///
/// A renderer copies [`UniformBlock::as_bytes`] into its uniform buffer when
/// [`UniformBlock::take_dirty`] reports a change.
#[derive(Debug, Clone, Default)]
pub struct UniformBlock {
    data: ViewUniform,
    dirty: bool,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ViewUniform {
        &self.data
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.data.view)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.data.projection)
    }

    pub fn view_position(&self) -> Vec3 {
        Vec3::from_array(self.data.view_position)
    }

    /// Raw bytes in std140-compatible layout
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.data)
    }

    /// True once after any upload since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl ShaderUniforms for UniformBlock {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        let slot = match name {
            VIEW_UNIFORM => &mut self.data.view,
            PROJECTION_UNIFORM => &mut self.data.projection,
            _ => {
                log::warn!("Ignoring unknown mat4 uniform {:?}", name);
                return;
            }
        };
        *slot = value.to_cols_array_2d();
        self.dirty = true;
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        if name != VIEW_POSITION_UNIFORM {
            log::warn!("Ignoring unknown vec3 uniform {:?}", name);
            return;
        }
        self.data.view_position = value.to_array();
        self.dirty = true;
    }
}
