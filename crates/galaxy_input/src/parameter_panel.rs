//! Keyboard parameter panel
//!
//! Controls:
//! - Tab / Shift+Tab: select next / previous parameter
//! - Up / Down: step the selected parameter by one step
//! - PageUp / PageDown: step by ten steps
//!
//! The panel never edits the field itself. Each change becomes a
//! [`FieldCommand`] on the command queue, and the panel reads current values
//! back from the [`FieldSpec`] it is handed.

use galaxy_core::{CommandSender, FieldCommand, FieldSpec};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Allowed values and step for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParameterRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Move `value` by `steps` steps, snapped to the step grid and clamped
    pub fn step(&self, value: f32, steps: i32) -> f32 {
        let raw = value + steps as f32 * self.step;
        let snapped = (raw / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }
}

/// A field parameter the panel can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Count,
    PointSize,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
    RotationSpeed,
}

impl Parameter {
    /// Panel order
    pub const ALL: [Parameter; 8] = [
        Parameter::Count,
        Parameter::PointSize,
        Parameter::Radius,
        Parameter::Branches,
        Parameter::Spin,
        Parameter::Randomness,
        Parameter::RandomnessPower,
        Parameter::RotationSpeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Count => "count",
            Parameter::PointSize => "size",
            Parameter::Radius => "radius",
            Parameter::Branches => "branches",
            Parameter::Spin => "spin",
            Parameter::Randomness => "randomness",
            Parameter::RandomnessPower => "randomness power",
            Parameter::RotationSpeed => "speed",
        }
    }

    pub fn range(&self) -> ParameterRange {
        match self {
            Parameter::Count => ParameterRange::new(100.0, 1_000_000.0, 100.0),
            Parameter::PointSize => ParameterRange::new(0.001, 0.1, 0.001),
            Parameter::Radius => ParameterRange::new(0.01, 20.0, 0.1),
            Parameter::Branches => ParameterRange::new(2.0, 20.0, 1.0),
            Parameter::Spin => ParameterRange::new(-5.0, 5.0, 0.1),
            Parameter::Randomness => ParameterRange::new(0.0, 2.0, 0.01),
            Parameter::RandomnessPower => ParameterRange::new(1.0, 10.0, 0.1),
            Parameter::RotationSpeed => ParameterRange::new(0.0, 10.0, 0.1),
        }
    }

    /// Current value in `spec`, or `None` if this kind of field lacks it
    pub fn read(&self, spec: &FieldSpec) -> Option<f32> {
        match (self, spec) {
            (Parameter::Count, _) => Some(spec.count() as f32),
            (Parameter::PointSize, _) => Some(spec.point_size()),
            (Parameter::RotationSpeed, _) => Some(spec.rotation_speed()),
            (Parameter::Radius, FieldSpec::Galaxy(c)) => Some(c.radius),
            (Parameter::Branches, FieldSpec::Galaxy(c)) => Some(c.branch_count as f32),
            (Parameter::Spin, FieldSpec::Galaxy(c)) => Some(c.spin_factor),
            (Parameter::Randomness, FieldSpec::Galaxy(c)) => Some(c.randomness_amount),
            (Parameter::RandomnessPower, FieldSpec::Galaxy(c)) => Some(c.randomness_power),
            (_, FieldSpec::Scatter(_)) => None,
        }
    }

    pub fn applies_to(&self, spec: &FieldSpec) -> bool {
        self.read(spec).is_some()
    }

    /// Command setting this parameter to `value`
    pub fn command(&self, value: f32) -> FieldCommand {
        match self {
            Parameter::Count => FieldCommand::SetCount(value.round() as u32),
            Parameter::PointSize => FieldCommand::SetPointSize(value),
            Parameter::Radius => FieldCommand::SetRadius(value),
            Parameter::Branches => FieldCommand::SetBranchCount(value.round() as u32),
            Parameter::Spin => FieldCommand::SetSpin(value),
            Parameter::Randomness => FieldCommand::SetRandomness(value),
            Parameter::RandomnessPower => FieldCommand::SetRandomnessPower(value),
            Parameter::RotationSpeed => FieldCommand::SetRotationSpeed(value),
        }
    }

    fn format(&self, value: f32) -> String {
        match self {
            Parameter::Count | Parameter::Branches => format!("{}", value.round() as u32),
            Parameter::PointSize => format!("{:.3}", value),
            _ => format!("{:.2}", value),
        }
    }
}

/// Keyboard-driven stand-in for a slider panel
pub struct ParameterPanel {
    sender: CommandSender,
    selected: usize,
    shift: bool,
}

impl ParameterPanel {
    pub fn new(sender: CommandSender) -> Self {
        Self {
            sender,
            selected: 0,
            shift: false,
        }
    }

    /// Currently selected parameter
    pub fn selected(&self) -> Parameter {
        Parameter::ALL[self.selected]
    }

    /// Process keyboard input against the current spec
    ///
    /// Returns true if the key was consumed by the panel.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState, spec: &FieldSpec) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.shift = pressed;
                false
            }
            KeyCode::Tab => {
                if pressed {
                    if self.shift {
                        self.select_previous(spec);
                    } else {
                        self.select_next(spec);
                    }
                }
                true
            }
            KeyCode::ArrowUp | KeyCode::ArrowDown | KeyCode::PageUp | KeyCode::PageDown => {
                if pressed {
                    let steps = match key {
                        KeyCode::ArrowUp => 1,
                        KeyCode::ArrowDown => -1,
                        KeyCode::PageUp => 10,
                        _ => -10,
                    };
                    self.step(spec, steps);
                }
                true
            }
            _ => false,
        }
    }

    /// Select the next parameter that `spec` has
    pub fn select_next(&mut self, spec: &FieldSpec) {
        self.advance(spec, 1);
    }

    /// Select the previous parameter that `spec` has
    pub fn select_previous(&mut self, spec: &FieldSpec) {
        self.advance(spec, Parameter::ALL.len() - 1);
    }

    fn advance(&mut self, spec: &FieldSpec, offset: usize) {
        let len = Parameter::ALL.len();
        for _ in 0..len {
            self.selected = (self.selected + offset) % len;
            if self.selected().applies_to(spec) {
                return;
            }
        }
    }

    /// Step the selected parameter and queue the resulting command
    ///
    /// Returns the command sent, or `None` if the value was already at the
    /// end of its range.
    pub fn step(&mut self, spec: &FieldSpec, steps: i32) -> Option<FieldCommand> {
        if !self.selected().applies_to(spec) {
            // The field changed kind under us (e.g. a preset switch)
            self.selected = 0;
        }

        let parameter = self.selected();
        let current = parameter.read(spec)?;
        let next = parameter.range().step(current, steps);
        if next == current {
            return None;
        }

        let command = parameter.command(next);
        log::debug!("Panel: {} {} -> {}", parameter.label(), current, next);
        self.sender.send(command);
        Some(command)
    }

    /// One-line description of the selection, for the window title
    pub fn summary(&self, spec: &FieldSpec) -> String {
        let parameter = self.selected();
        match parameter.read(spec) {
            Some(value) => format!("{}: {}", parameter.label(), parameter.format(value)),
            None => format!("{}: n/a", parameter.label()),
        }
    }
}
