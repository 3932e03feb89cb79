//! GPU-compatible data types for the point pipeline
//!
//! These types are designed to match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};
use galaxy_math::mat4::{self, Mat4};

/// Vertices drawn per point (two triangles forming a quad)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Uniforms for the point pass
/// Layout: 208 bytes total (must match points.wgsl PointUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointUniforms {
    /// World-to-view matrix (64 bytes)
    pub view_matrix: Mat4,
    /// View-to-clip matrix (64 bytes)
    pub projection_matrix: Mat4,
    /// Field-to-world matrix, carries the field's spin about Y (64 bytes)
    pub model_matrix: Mat4,
    /// Sprite size in world units
    pub point_size: f32,
    pub _padding: [f32; 3],
}

impl Default for PointUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            model_matrix: mat4::IDENTITY,
            point_size: 0.01,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_point_uniforms_size() {
        // 3 matrices * 64 bytes + point_size + 3 floats padding = 208 bytes
        assert_eq!(size_of::<PointUniforms>(), 208);
        assert_eq!(size_of::<PointUniforms>() % 16, 0);
    }
}
