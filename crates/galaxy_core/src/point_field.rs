//! Generated point field
//!
//! A [`PointField`] is the output of one generation call. Positions and colors
//! are stored in two parallel vectors that only grow together, so index `i`
//! of one always belongs to index `i` of the other.

use galaxy_math::Vec3;

/// Index-aligned positions and colors plus the size to draw them at
#[derive(Debug, Clone, PartialEq)]
pub struct PointField {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    point_size: f32,
}

impl PointField {
    /// Create an empty field with room for `capacity` points
    pub(crate) fn with_capacity(capacity: usize, point_size: f32) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            point_size,
        }
    }

    /// Append one point
    pub(crate) fn push(&mut self, position: Vec3, color: [f32; 3]) {
        self.positions.push(position);
        self.colors.push(color);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the field has no points
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Point positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Linear RGB colors, one per position
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Size to render each point at (world units)
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Flat `[x0, y0, z0, x1, ...]` view of the positions (3 floats per point)
    pub fn position_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Flat `[r0, g0, b0, r1, ...]` view of the colors (3 floats per point)
    pub fn color_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Iterate over `(position, color)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, [f32; 3])> + '_ {
        self.positions.iter().copied().zip(self.colors.iter().copied())
    }

    /// True if every position and color component is finite
    pub fn is_finite(&self) -> bool {
        self.position_buffer().iter().all(|v| v.is_finite())
            && self.color_buffer().iter().all(|v| v.is_finite())
    }

    /// Largest distance of any point from the Y axis
    pub fn max_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| (p.x * p.x + p.z * p.z).sqrt())
            .fold(0.0, f32::max)
    }
}
