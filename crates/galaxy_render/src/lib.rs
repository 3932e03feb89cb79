//! Point Field Rendering
//!
//! This crate provides the wgpu-based pipeline for drawing point fields as
//! camera-facing sprites.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`orbit_camera::OrbitCamera`] - Camera orbiting a target point
//! - [`pipeline::PointPipeline`] - Instanced billboard rendering with additive blending
//! - [`field_buffers::FieldBuffers`] - A [`PointField`] uploaded to GPU buffers

pub mod context;
pub mod orbit_camera;
pub mod pipeline;
pub mod field_buffers;

// Re-export core types for convenience
pub use galaxy_core::{PointField, FieldSpec, Vec3};

pub use field_buffers::FieldBuffers;
pub use orbit_camera::OrbitCamera;
