//! Field presets
//!
//! Provides [`PresetLibrary`] for loading/saving named field specs from RON
//! files. A library looks like:
//!
//! ```ron
//! (
//!     presets: [
//!         (name: "galaxy", spec: Galaxy((count: 40000, radius: 6.0))),
//!     ],
//! )
//! ```

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::config::{FieldSpec, PointFieldConfig, ScatterConfig};

/// A named field spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name (unique within a library)
    pub name: String,
    /// What to generate
    pub spec: FieldSpec,
}

impl Preset {
    pub fn new(name: impl Into<String>, spec: FieldSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// An ordered collection of presets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    pub presets: Vec<Preset>,
}

impl PresetLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled presets: galaxy, particle cube, floor dust, parallax dust column
    pub fn builtin() -> Self {
        let mut library = Self::new();
        library.add(Preset::new("galaxy", FieldSpec::Galaxy(PointFieldConfig::default())));
        library.add(Preset::new(
            "particles",
            FieldSpec::Scatter(ScatterConfig::default()),
        ));
        library.add(Preset::new(
            "floor_dust",
            FieldSpec::Scatter(ScatterConfig {
                count: 3_000,
                half_extents: [20.0, 0.0, 20.0],
                center: [0.0, -0.5, 0.0],
                color: [1.0, 1.0, 1.0],
                point_size: 0.02,
                rotation_speed: 0.0,
            }),
        ));
        library.add(Preset::new(
            "parallax_dust",
            FieldSpec::Scatter(ScatterConfig {
                count: 300,
                half_extents: [5.0, 6.0, 5.0],
                center: [0.0, -4.4, 0.0],
                color: [1.0, 0.847, 0.847],
                point_size: 0.02,
                rotation_speed: 0.0,
            }),
        ));
        library
    }

    /// Load a library from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetLoadError> {
        let contents = fs::read_to_string(path)?;
        let library = ron::from_str(&contents)?;
        Ok(library)
    }

    /// Save the library to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetSaveError> {
        let pretty = ron::ser::PrettyConfig::new().enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Append a preset
    pub fn add(&mut self, preset: Preset) {
        self.presets.push(preset);
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Position of a preset by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.name == name)
    }

    /// Preset at `index`, wrapping around the end
    pub fn cycle(&self, index: usize) -> Option<&Preset> {
        if self.presets.is_empty() {
            None
        } else {
            self.presets.get(index % self.presets.len())
        }
    }

    /// Preset names in order
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Error loading a preset library
#[derive(Debug)]
pub enum PresetLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for PresetLoadError {
    fn from(e: io::Error) -> Self {
        PresetLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PresetLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        PresetLoadError::Parse(e)
    }
}

impl std::fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetLoadError::Io(e) => write!(f, "IO error: {}", e),
            PresetLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PresetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetLoadError::Io(e) => Some(e),
            PresetLoadError::Parse(e) => Some(e),
        }
    }
}

/// Error saving a preset library
#[derive(Debug)]
pub enum PresetSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for PresetSaveError {
    fn from(e: io::Error) -> Self {
        PresetSaveError::Io(e)
    }
}

impl From<ron::Error> for PresetSaveError {
    fn from(e: ron::Error) -> Self {
        PresetSaveError::Serialize(e)
    }
}

impl std::fmt::Display for PresetSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetSaveError::Io(e) => write!(f, "IO error: {}", e),
            PresetSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for PresetSaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let library = PresetLibrary::builtin();
        assert_eq!(
            library.names(),
            vec!["galaxy", "particles", "floor_dust", "parallax_dust"]
        );
        assert_eq!(library.get("galaxy").unwrap().spec.count(), 40_000);
        assert_eq!(library.get("particles").unwrap().spec.count(), 20_000);
    }

    #[test]
    fn test_parallax_dust_spans_column() {
        let library = PresetLibrary::builtin();
        match library.get("parallax_dust").unwrap().spec {
            FieldSpec::Scatter(config) => {
                assert_eq!(config.count, 300);
                let top = config.center[1] + config.half_extents[1];
                let bottom = config.center[1] - config.half_extents[1];
                assert!((top - 1.6).abs() < 1e-5);
                assert!((bottom + 10.4).abs() < 1e-5);
                assert_eq!(config.half_extents[0], 5.0);
                assert_eq!(config.half_extents[2], 5.0);
            }
            other => panic!("Expected scatter, got {:?}", other),
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.ron");

        let library = PresetLibrary::builtin();
        library.save(&path).unwrap();
        let loaded = PresetLibrary::load(&path).unwrap();

        assert_eq!(loaded, library);
    }

    #[test]
    fn test_parse_handwritten_ron_with_defaults() {
        let text = r#"(
            presets: [
                (name: "tight", spec: Galaxy((count: 1000, spin_factor: 3.0))),
                (name: "slab", spec: Scatter((count: 10, half_extents: (1.0, 0.0, 1.0)))),
            ],
        )"#;
        let library: PresetLibrary = ron::from_str(text).unwrap();

        match library.get("tight").unwrap().spec {
            FieldSpec::Galaxy(config) => {
                assert_eq!(config.count, 1000);
                assert_eq!(config.spin_factor, 3.0);
                // Missing fields fall back to defaults
                assert_eq!(config.radius, 6.0);
            }
            other => panic!("Expected galaxy, got {:?}", other),
        }
        assert_eq!(library.get("slab").unwrap().spec.kind(), "scatter");
    }

    #[test]
    fn test_load_missing_file() {
        let result = PresetLibrary::load("/nonexistent/presets.ron");
        assert!(matches!(result, Err(PresetLoadError::Io(_))));
    }

    #[test]
    fn test_load_invalid_ron() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        fs::write(&path, "(presets: [").unwrap();

        let err = PresetLibrary::load(&path).unwrap_err();
        assert!(format!("{}", err).starts_with("Parse error"));
    }

    #[test]
    fn test_cycle_wraps() {
        let library = PresetLibrary::builtin();
        assert_eq!(library.cycle(4).unwrap().name, "galaxy");
        assert_eq!(library.cycle(5).unwrap().name, "particles");
        assert!(PresetLibrary::new().cycle(0).is_none());
        assert_eq!(library.index_of("floor_dust"), Some(2));
    }
}
