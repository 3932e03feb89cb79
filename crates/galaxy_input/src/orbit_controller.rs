//! Orbit controller
//!
//! Controls:
//! - Left mouse drag: orbit around the target
//! - Mouse wheel: dolly in/out
//!
//! With damping enabled the accumulated motion is released gradually: each
//! update applies `damping_factor` of what is left, so the camera keeps
//! gliding for a moment after the mouse stops.

use galaxy_math::Vec3;
use winit::event::{ElementState, MouseButton};

/// Orbit controller for handling mouse input
pub struct OrbitController {
    // Mouse state
    dragging: bool,

    // Motion not yet applied to the camera
    pending_yaw: f32,
    pending_pitch: f32,
    /// Natural log of the pending distance scale
    pending_dolly: f32,

    // Configuration
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub damping_factor: f32,
    pub damping_enabled: bool,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,

            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_dolly: 0.0,

            rotate_sensitivity: 0.005, // radians per pixel
            zoom_sensitivity: 0.1,     // log-distance per wheel line
            damping_factor: 0.05,
            damping_enabled: true,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement (only orbits while the left button is held)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if !self.dragging {
            return;
        }
        // Dragging right swings the camera left so the scene follows the cursor;
        // dragging down raises the camera
        self.pending_yaw -= delta_x as f32 * self.rotate_sensitivity;
        self.pending_pitch += delta_y as f32 * self.rotate_sensitivity;
    }

    /// Process scroll wheel input in lines (positive = away from the user)
    pub fn process_scroll(&mut self, lines: f32) {
        self.pending_dolly -= lines * self.zoom_sensitivity;
    }

    /// Update the camera based on accumulated input
    ///
    /// Returns the camera eye position for debug display.
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C) -> Vec3 {
        let fraction = if self.damping_enabled {
            self.damping_factor.clamp(0.0, 1.0)
        } else {
            1.0
        };

        let yaw = self.pending_yaw * fraction;
        let pitch = self.pending_pitch * fraction;
        let dolly = self.pending_dolly * fraction;

        if yaw != 0.0 || pitch != 0.0 {
            camera.orbit(yaw, pitch);
        }
        if dolly != 0.0 {
            camera.dolly(dolly.exp());
        }

        self.pending_yaw -= yaw;
        self.pending_pitch -= pitch;
        self.pending_dolly -= dolly;

        camera.eye()
    }

    /// Drop any motion still waiting to be applied
    pub fn stop(&mut self) {
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_dolly = 0.0;
    }

    /// Toggle damping on/off
    pub fn toggle_damping(&mut self) -> bool {
        self.damping_enabled = !self.damping_enabled;
        self.damping_enabled
    }

    /// Builder: set orbit sensitivity (radians per pixel)
    pub fn with_rotate_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotate_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom sensitivity (log-distance per wheel line)
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Builder: set the share of pending motion applied per update
    pub fn with_damping_factor(mut self, factor: f32) -> Self {
        self.damping_factor = factor;
        self
    }

    /// Builder: enable or disable damping
    pub fn with_damping(mut self, enabled: bool) -> Self {
        self.damping_enabled = enabled;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Swing around the target by yaw (about Y) and pitch (elevation)
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Multiply the distance to the target by `scale`
    fn dolly(&mut self, scale: f32);
    /// Current eye position
    fn eye(&self) -> Vec3;
}
