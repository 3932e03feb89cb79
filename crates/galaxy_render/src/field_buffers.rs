//! GPU copy of a point field
//!
//! Positions and colors go into two separate vertex buffers, one `vec3` per
//! point each, stepped once per instance by the point pipeline.

use galaxy_core::PointField;
use wgpu::util::DeviceExt;

/// A [`PointField`] uploaded to the GPU
pub struct FieldBuffers {
    pub positions: wgpu::Buffer,
    pub colors: wgpu::Buffer,
    point_count: u32,
    point_size: f32,
}

impl FieldBuffers {
    /// Upload both flat buffers of `field`
    pub fn upload(device: &wgpu::Device, field: &PointField) -> Self {
        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Position Buffer"),
            contents: bytemuck::cast_slice(field.position_buffer()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Color Buffer"),
            contents: bytemuck::cast_slice(field.color_buffer()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            positions,
            colors,
            point_count: field.len() as u32,
            point_size: field.point_size(),
        }
    }

    /// Number of points (instances) to draw
    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Bytes held on the GPU across both buffers
    pub fn byte_size(&self) -> u64 {
        self.positions.size() + self.colors.size()
    }
}
