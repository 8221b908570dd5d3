use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Near clip plane shared by both projection modes
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane shared by both projection modes
pub const FAR_PLANE: f32 = 100.0;
/// Half extent of the orthographic frustum on both axes
pub const ORTHO_HALF_EXTENT: f32 = 10.0;

/// Which projection the viewport renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Clip planes and orthographic extent used to build projection matrices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub near: f32,
    pub far: f32,
    pub ortho_half_extent: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ortho_half_extent: ORTHO_HALF_EXTENT,
        }
    }
}

impl ProjectionSettings {
    /// Projection matrix for `mode`.
    ///
    /// `fov_degrees` and `aspect` only feed the perspective matrix; the
    /// orthographic frustum is fixed and ignores them.
    pub fn matrix(&self, mode: ProjectionMode, fov_degrees: f32, aspect: f32) -> Mat4 {
        match mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let extent = self.ortho_half_extent;
                Mat4::orthographic_rh_gl(-extent, extent, -extent, extent, self.near, self.far)
            }
        }
    }
}
