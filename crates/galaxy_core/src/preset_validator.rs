//! Preset validation
//!
//! Checks a [`PresetLibrary`] for problems before any preset is applied:
//! empty libraries, duplicate names, invalid specs and point counts above
//! what the viewer is meant to handle.

use std::collections::HashSet;

use crate::config::FieldConfigError;
use crate::preset::PresetLibrary;

/// Largest point count a preset may ask for
pub const MAX_PRESET_COUNT: u32 = 1_000_000;

/// Validation error found in a preset library
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Library has no presets
    EmptyLibrary,
    /// Duplicate preset name found
    DuplicateName(String),
    /// Preset spec fails config validation
    InvalidSpec { name: String, error: FieldConfigError },
    /// Preset asks for more points than [`MAX_PRESET_COUNT`]
    ExcessiveCount { name: String, count: u32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyLibrary => write!(f, "Preset library is empty"),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate preset name: '{}'", name)
            }
            ValidationError::InvalidSpec { name, error } => {
                write!(f, "Preset '{}' is invalid: {}", name, error)
            }
            ValidationError::ExcessiveCount { name, count } => {
                write!(
                    f,
                    "Preset '{}' asks for {} points (max {})",
                    name, count, MAX_PRESET_COUNT
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates preset libraries
///
/// # Example
/// ```ignore
/// let errors = PresetValidator::validate(&library);
/// for error in &errors {
///     log::warn!("{}", error);
/// }
/// ```
pub struct PresetValidator;

impl PresetValidator {
    /// Validate a library, returning all errors found
    ///
    /// Returns an empty vector if the library is usable as-is.
    pub fn validate(library: &PresetLibrary) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if library.is_empty() {
            errors.push(ValidationError::EmptyLibrary);
            return errors;
        }

        let mut seen = HashSet::new();
        for preset in &library.presets {
            if !seen.insert(preset.name.as_str()) {
                errors.push(ValidationError::DuplicateName(preset.name.clone()));
            }

            if let Err(error) = preset.spec.validate() {
                errors.push(ValidationError::InvalidSpec {
                    name: preset.name.clone(),
                    error,
                });
            }

            let count = preset.spec.count();
            if count > MAX_PRESET_COUNT {
                errors.push(ValidationError::ExcessiveCount {
                    name: preset.name.clone(),
                    count,
                });
            }
        }

        errors
    }

    /// Check if a library passes validation
    pub fn is_valid(library: &PresetLibrary) -> bool {
        Self::validate(library).is_empty()
    }
}
