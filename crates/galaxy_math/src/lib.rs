//! 3D Mathematics Library
//!
//! This crate provides the small vector and matrix toolkit used by the
//! galaxy viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix (view, projection, model transforms)

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
