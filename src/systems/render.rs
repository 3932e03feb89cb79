//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Point pipeline and the uploaded field
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use galaxy_core::PointField;
use galaxy_math::mat4;
use galaxy_render::{
    context::{ContextError, RenderContext},
    pipeline::{PointPipeline, PointUniforms},
    FieldBuffers, OrbitCamera,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: PointPipeline,
    buffers: FieldBuffers,
    render_config: RenderingConfig,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config, uploading `field`
    pub fn new(
        window: Arc<Window>,
        field: &PointField,
        render_config: RenderingConfig,
        camera_config: CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = PointPipeline::new(
            &context.device,
            context.config.format,
            render_config.additive_blending,
        );
        let buffers = FieldBuffers::upload(&context.device, field);

        Ok(Self {
            context,
            pipeline,
            buffers,
            render_config,
            camera_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Replace the uploaded field
    ///
    /// The old buffers are dropped after the new ones are in place.
    pub fn upload_field(&mut self, field: &PointField) {
        let buffers = FieldBuffers::upload(&self.context.device, field);
        let previous = std::mem::replace(&mut self.buffers, buffers);
        drop(previous);

        log::info!(
            "Uploaded {} points ({} KiB)",
            self.buffers.point_count(),
            self.buffers.byte_size() / 1024
        );
    }

    /// Render a single frame with the field turned by `rotation_angle` about Y
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        rotation_angle: f32,
    ) -> Result<(), RenderError> {
        let aspect = self.context.aspect_ratio();
        let uniforms = PointUniforms {
            view_matrix: camera.view_matrix(),
            projection_matrix: mat4::perspective(
                self.camera_config.fov.to_radians(),
                aspect,
                self.camera_config.near,
                self.camera_config.far,
            ),
            model_matrix: mat4::rotation_y(rotation_angle),
            point_size: self.buffers.point_size(),
            _padding: [0.0; 3],
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            &self.buffers,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "GPU setup failed: No suitable GPU adapter found"
        );
    }
}
