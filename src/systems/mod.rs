//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{apply_commands, rotation_angle, CommandSummary, SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
