//! Startup preset selection
//!
//! Loads the preset library named in the config, falling back to the
//! built-in presets when the file is missing, unreadable or unusable.

use galaxy_core::{FieldSpec, PresetLibrary, PresetValidator, MAX_PRESET_COUNT};
use std::path::Path;

/// Load a preset library, logging problems instead of failing
pub fn load_library<P: AsRef<Path>>(path: P) -> PresetLibrary {
    let path = path.as_ref();

    let library = match PresetLibrary::load(path) {
        Ok(library) => library,
        Err(e) => {
            log::warn!(
                "Failed to load presets from {}: {}. Using built-in presets.",
                path.display(),
                e
            );
            return PresetLibrary::builtin();
        }
    };

    let errors = PresetValidator::validate(&library);
    if errors.is_empty() {
        log::info!("Loaded {} presets from {}", library.len(), path.display());
        return library;
    }

    for error in &errors {
        log::warn!("{}: {}", path.display(), error);
    }

    // Keep whatever still generates within the count limit; fall back only if nothing does
    let mut usable = PresetLibrary::new();
    for preset in library.presets {
        if preset.spec.validate().is_ok()
            && preset.spec.count() <= MAX_PRESET_COUNT
            && usable.get(&preset.name).is_none()
        {
            usable.add(preset);
        }
    }
    if usable.is_empty() {
        log::warn!("No usable presets in {}. Using built-in presets.", path.display());
        PresetLibrary::builtin()
    } else {
        usable
    }
}

/// Index and spec of the preset to show first
///
/// Falls back to the first preset when `name` is unknown.
pub fn initial_preset(library: &PresetLibrary, name: &str) -> (usize, FieldSpec) {
    let index = library.index_of(name).unwrap_or_else(|| {
        log::warn!("Unknown preset '{}', starting with the first one", name);
        0
    });
    let spec = library
        .cycle(index)
        .map(|preset| preset.spec)
        .unwrap_or_default();
    (index, spec)
}

/// Name shown for the current field
///
/// Marked with `*` once edits move the field away from its preset.
pub fn display_name(library: &PresetLibrary, index: usize, spec: &FieldSpec) -> String {
    match library.cycle(index) {
        Some(preset) if preset.spec == *spec => preset.name.clone(),
        Some(preset) => format!("{}*", preset.name),
        None => "custom".to_string(),
    }
}
