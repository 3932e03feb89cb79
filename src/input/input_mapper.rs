//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Reseed, Exit, etc.
//! Panel keys (Tab, arrows, PageUp/PageDown) are NOT mapped here - they go
//! directly to the ParameterPanel. Mouse input goes to the OrbitController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reset camera to its starting pose (R key)
    ResetCamera,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Regenerate the field from a fresh seed (N key)
    Reseed,
    /// Switch to the next preset (P key)
    NextPreset,
    /// Toggle orbit damping (G key)
    ToggleDamping,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyN => Some(InputAction::Reseed),
            KeyCode::KeyP => Some(InputAction::NextPreset),
            KeyCode::KeyG => Some(InputAction::ToggleDamping),
            _ => None,
        }
    }
}
