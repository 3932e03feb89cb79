//! Rendering pipeline components

pub mod types;
pub mod point_pipeline;

pub use types::{PointUniforms, QUAD_VERTEX_COUNT};
pub use point_pipeline::PointPipeline;
