//! Point field configuration
//!
//! Configs are plain values: the generator receives one per call and never
//! keeps a reference to it. Validation runs before any point is produced.

use serde::{Serialize, Deserialize};

/// Angular rate applied to `rotation_speed` (radians per second per unit)
pub const ROTATION_RATE: f32 = 0.2;

/// Parameters of the spiral galaxy generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointFieldConfig {
    /// Number of points to generate (>= 1)
    pub count: u32,
    /// Outer radius of the field (> 0)
    pub radius: f32,
    /// Number of spiral arms (>= 1)
    pub branch_count: u32,
    /// Extra angle per unit of radius (radians)
    pub spin_factor: f32,
    /// Maximum offset from the arm on each axis (>= 0)
    pub randomness_amount: f32,
    /// Exponent biasing offsets toward the arm (>= 1)
    pub randomness_power: f32,
    /// Rendered point size in world units (> 0)
    pub point_size: f32,
    /// Rotation speed of the whole field about Y (>= 0, render time only)
    pub rotation_speed: f32,
}

impl Default for PointFieldConfig {
    fn default() -> Self {
        Self {
            count: 40_000,
            radius: 6.0,
            branch_count: 5,
            spin_factor: 1.0,
            randomness_amount: 0.2,
            randomness_power: 5.0,
            point_size: 0.01,
            rotation_speed: 0.0,
        }
    }
}

impl PointFieldConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        check_finite("radius", self.radius)?;
        check_finite("spin_factor", self.spin_factor)?;
        check_finite("randomness_amount", self.randomness_amount)?;
        check_finite("randomness_power", self.randomness_power)?;
        check_finite("point_size", self.point_size)?;
        check_finite("rotation_speed", self.rotation_speed)?;

        if self.count == 0 {
            return Err(FieldConfigError::ZeroCount);
        }
        if self.radius <= 0.0 {
            return Err(FieldConfigError::NonPositiveRadius(self.radius));
        }
        if self.branch_count == 0 {
            return Err(FieldConfigError::ZeroBranches);
        }
        if self.randomness_amount < 0.0 {
            return Err(FieldConfigError::NegativeRandomness(self.randomness_amount));
        }
        if self.randomness_power < 1.0 {
            return Err(FieldConfigError::RandomnessPowerBelowOne(self.randomness_power));
        }
        if self.point_size <= 0.0 {
            return Err(FieldConfigError::NonPositivePointSize(self.point_size));
        }
        if self.rotation_speed < 0.0 {
            return Err(FieldConfigError::NegativeRotationSpeed(self.rotation_speed));
        }

        // Largest twist angle and largest coordinate a point can reach
        check_derived("radius * spin_factor", self.radius * self.spin_factor.abs())?;
        check_derived("radius + randomness_amount", self.radius + self.randomness_amount)?;
        Ok(())
    }

    /// Builder: set point count
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Builder: set outer radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Builder: set number of arms
    pub fn with_branches(mut self, branch_count: u32) -> Self {
        self.branch_count = branch_count;
        self
    }

    /// Builder: set spin factor
    pub fn with_spin(mut self, spin_factor: f32) -> Self {
        self.spin_factor = spin_factor;
        self
    }

    /// Builder: set randomness amount and power
    pub fn with_randomness(mut self, amount: f32, power: f32) -> Self {
        self.randomness_amount = amount;
        self.randomness_power = power;
        self
    }
}

/// Parameters of the uniform box scatter generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Number of points to generate (>= 1)
    pub count: u32,
    /// Half size of the box on each axis (each >= 0; 0 flattens that axis)
    pub half_extents: [f32; 3],
    /// Center of the box
    pub center: [f32; 3],
    /// Linear RGB color shared by every point
    pub color: [f32; 3],
    /// Rendered point size in world units (> 0)
    pub point_size: f32,
    /// Rotation speed of the whole field about Y (>= 0, render time only)
    pub rotation_speed: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 20_000,
            half_extents: [5.0, 5.0, 5.0],
            center: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
            point_size: 0.1,
            rotation_speed: 0.0,
        }
    }
}

impl ScatterConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        for (name, values) in [
            ("half_extents", self.half_extents),
            ("center", self.center),
            ("color", self.color),
        ] {
            for value in values {
                check_finite(name, value)?;
            }
        }
        check_finite("point_size", self.point_size)?;
        check_finite("rotation_speed", self.rotation_speed)?;

        if self.count == 0 {
            return Err(FieldConfigError::ZeroCount);
        }
        if let Some(&extent) = self.half_extents.iter().find(|e| **e < 0.0) {
            return Err(FieldConfigError::NegativeExtent(extent));
        }
        if self.point_size <= 0.0 {
            return Err(FieldConfigError::NonPositivePointSize(self.point_size));
        }
        if self.rotation_speed < 0.0 {
            return Err(FieldConfigError::NegativeRotationSpeed(self.rotation_speed));
        }

        for axis in 0..3 {
            let reach = self.center[axis].abs() + self.half_extents[axis];
            check_derived("center + half_extents", reach)?;
        }
        Ok(())
    }
}

/// What to generate: a spiral galaxy or a uniform scatter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldSpec {
    Galaxy(PointFieldConfig),
    Scatter(ScatterConfig),
}

impl Default for FieldSpec {
    fn default() -> Self {
        FieldSpec::Galaxy(PointFieldConfig::default())
    }
}

impl FieldSpec {
    /// Validate the wrapped config
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        match self {
            FieldSpec::Galaxy(config) => config.validate(),
            FieldSpec::Scatter(config) => config.validate(),
        }
    }

    /// Short name of the generator kind (for logs and the panel)
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Galaxy(_) => "galaxy",
            FieldSpec::Scatter(_) => "scatter",
        }
    }

    /// Number of points this spec produces
    pub fn count(&self) -> u32 {
        match self {
            FieldSpec::Galaxy(config) => config.count,
            FieldSpec::Scatter(config) => config.count,
        }
    }

    /// Rendered point size
    pub fn point_size(&self) -> f32 {
        match self {
            FieldSpec::Galaxy(config) => config.point_size,
            FieldSpec::Scatter(config) => config.point_size,
        }
    }

    /// Rotation speed about Y
    pub fn rotation_speed(&self) -> f32 {
        match self {
            FieldSpec::Galaxy(config) => config.rotation_speed,
            FieldSpec::Scatter(config) => config.rotation_speed,
        }
    }

    /// Signed angular velocity of the field about Y (radians per second)
    ///
    /// A galaxy with negative spin turns the other way so the arms trail.
    pub fn angular_velocity(&self) -> f32 {
        let direction = match self {
            FieldSpec::Galaxy(config) if config.spin_factor < 0.0 => -1.0,
            _ => 1.0,
        };
        ROTATION_RATE * self.rotation_speed() * direction
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), FieldConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FieldConfigError::NonFinite { field, value })
    }
}

fn check_derived(quantity: &'static str, value: f32) -> Result<(), FieldConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FieldConfigError::DerivedOverflow { quantity })
    }
}

/// Rejected point field configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldConfigError {
    /// A numeric field is NaN or infinite
    NonFinite { field: &'static str, value: f32 },
    /// Point count is zero
    ZeroCount,
    /// Radius is zero or negative
    NonPositiveRadius(f32),
    /// Branch count is zero
    ZeroBranches,
    /// Randomness amount is negative
    NegativeRandomness(f32),
    /// Randomness power is below 1
    RandomnessPowerBelowOne(f32),
    /// Point size is zero or negative
    NonPositivePointSize(f32),
    /// A scatter half extent is negative
    NegativeExtent(f32),
    /// Rotation speed is negative
    NegativeRotationSpeed(f32),
    /// Fields are finite on their own but combine past `f32` range
    DerivedOverflow { quantity: &'static str },
    /// The parameter does not exist on this kind of field
    Unsupported { parameter: &'static str, kind: &'static str },
}

impl std::fmt::Display for FieldConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldConfigError::NonFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            FieldConfigError::ZeroCount => write!(f, "count must be at least 1"),
            FieldConfigError::NonPositiveRadius(r) => {
                write!(f, "radius must be positive, got {}", r)
            }
            FieldConfigError::ZeroBranches => write!(f, "branch count must be at least 1"),
            FieldConfigError::NegativeRandomness(a) => {
                write!(f, "randomness amount must not be negative, got {}", a)
            }
            FieldConfigError::RandomnessPowerBelowOne(p) => {
                write!(f, "randomness power must be at least 1, got {}", p)
            }
            FieldConfigError::NonPositivePointSize(s) => {
                write!(f, "point size must be positive, got {}", s)
            }
            FieldConfigError::NegativeExtent(e) => {
                write!(f, "half extents must not be negative, got {}", e)
            }
            FieldConfigError::NegativeRotationSpeed(s) => {
                write!(f, "rotation speed must not be negative, got {}", s)
            }
            FieldConfigError::DerivedOverflow { quantity } => {
                write!(f, "{} overflows", quantity)
            }
            FieldConfigError::Unsupported { parameter, kind } => {
                write!(f, "{} has no '{}' parameter", kind, parameter)
            }
        }
    }
}

impl std::error::Error for FieldConfigError {}
