//! Per-frame simulation system
//!
//! Runs once per frame before rendering:
//! - Drain queued field commands and apply them in order
//! - Advance the field's spin about Y
//! - Step the damped orbit controls

use std::time::Instant;
use galaxy_core::{CommandQueue, FieldManager, FieldSpec};
use galaxy_input::OrbitController;
use galaxy_render::OrbitCamera;

/// Result of a simulation update
pub struct SimulationResult {
    /// Whether the field was regenerated and needs re-uploading
    pub field_dirty: bool,
    /// Angle of the field about Y for this frame (radians)
    pub rotation_angle: f32,
}

/// Outcome of draining the command queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Manages the per-frame update
pub struct SimulationSystem {
    start: Instant,
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Run one frame
    ///
    /// # Arguments
    /// * `field` - Field manager owning the current point field
    /// * `commands` - Queue filled by input handling since the last frame
    /// * `camera` - Orbit camera to move
    /// * `controller` - Orbit controls holding pending mouse motion
    pub fn update(
        &mut self,
        field: &mut FieldManager,
        commands: &CommandQueue,
        camera: &mut OrbitCamera,
        controller: &mut OrbitController,
    ) -> SimulationResult {
        let summary = apply_commands(field, commands);
        if summary.rejected > 0 {
            log::debug!(
                "Frame commands: {} applied, {} rejected",
                summary.applied,
                summary.rejected
            );
        }

        let elapsed = self.start.elapsed().as_secs_f32();
        let rotation_angle = rotation_angle(elapsed, field.spec());

        controller.update(camera);

        SimulationResult {
            field_dirty: summary.applied > 0,
            rotation_angle,
        }
    }
}

/// Apply every queued command in arrival order
///
/// A rejected command is logged and skipped; the field it would have replaced
/// stays current, and later commands still apply.
pub fn apply_commands(field: &mut FieldManager, commands: &CommandQueue) -> CommandSummary {
    let mut summary = CommandSummary { applied: 0, rejected: 0 };

    for command in commands.drain() {
        match field.apply(command) {
            Ok(()) => summary.applied += 1,
            Err(e) => {
                log::warn!("Rejected {:?}: {}", command, e);
                summary.rejected += 1;
            }
        }
    }

    summary
}

/// Angle of the field about Y after `elapsed` seconds
pub fn rotation_angle(elapsed: f32, spec: &FieldSpec) -> f32 {
    elapsed * spec.angular_velocity()
}
