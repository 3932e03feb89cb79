//! Galaxy viewer
//!
//! Application-level pieces of the viewer: configuration, input mapping,
//! preset selection and the per-frame systems. The binary in `main.rs` wires
//! them to a winit event loop.

pub mod config;
pub mod input;
pub mod presets;
pub mod systems;
