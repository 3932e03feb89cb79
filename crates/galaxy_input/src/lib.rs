//! Input Handling
//!
//! This crate turns raw winit input into camera motion and field commands:
//! damped orbit controls for the camera, and a keyboard parameter panel that
//! stands in for a slider GUI.

mod orbit_controller;
mod parameter_panel;

pub use orbit_controller::{OrbitController, OrbitControl};
pub use parameter_panel::{Parameter, ParameterPanel, ParameterRange};
