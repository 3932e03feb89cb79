//! Core types for the galaxy viewer
//!
//! This crate provides everything needed to describe and build point fields:
//!
//! - [`PointFieldConfig`] - Parameters of the spiral galaxy generator
//! - [`ScatterConfig`] - Parameters of the uniform box scatter generator
//! - [`FieldSpec`] - Either of the above, as stored in presets
//! - [`PointField`] - Index-aligned positions and colors ready for upload
//! - [`RandomSource`] - Uniform `[0, 1)` sampler the generators consume
//! - [`FieldManager`] - Owns the current field and applies [`FieldCommand`]s
//! - [`PresetLibrary`] - Named specs loaded from / saved to RON files

mod config;
pub mod color;
mod random;
mod point_field;
pub mod generator;
mod command;
mod field_manager;
mod preset;
mod preset_validator;

pub use config::{PointFieldConfig, ScatterConfig, FieldSpec, FieldConfigError};
pub use random::RandomSource;
pub use point_field::PointField;
pub use generator::{generate_galaxy, generate_scatter};
pub use command::{FieldCommand, CommandQueue, CommandSender};
pub use field_manager::FieldManager;
pub use preset::{Preset, PresetLibrary, PresetLoadError, PresetSaveError};
pub use preset_validator::{PresetValidator, ValidationError, MAX_PRESET_COUNT};

// Re-export commonly used math types for convenience
pub use galaxy_math::Vec3;
