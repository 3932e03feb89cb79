//! Field manager
//!
//! Owns the current spec, the random source and the field generated from
//! them. Every accepted command regenerates the whole field; a rejected one
//! leaves the previous spec and field untouched.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::command::FieldCommand;
use crate::config::{FieldConfigError, FieldSpec};
use crate::point_field::PointField;

/// Holds the live field and applies [`FieldCommand`]s to it
pub struct FieldManager {
    spec: FieldSpec,
    rng: StdRng,
    seed: u64,
    field: PointField,
    /// Bumped each time `field` is replaced
    generation: u64,
}

impl FieldManager {
    /// Generate the initial field from `spec` with a seeded source
    pub fn new(spec: FieldSpec, seed: u64) -> Result<Self, FieldConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = spec.generate(&mut rng)?;

        log::info!(
            "Generated initial {} field: {} points (seed {})",
            spec.kind(),
            field.len(),
            seed
        );

        Ok(Self {
            spec,
            rng,
            seed,
            field,
            generation: 0,
        })
    }

    /// The spec the current field was generated from
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// The current field
    pub fn field(&self) -> &PointField {
        &self.field
    }

    /// Generation counter (0 for the initial field)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed the random source was last reset to
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply one command
    ///
    /// On success the field has been regenerated in full. On error nothing
    /// changed and the caller should keep displaying the current field.
    pub fn apply(&mut self, command: FieldCommand) -> Result<(), FieldConfigError> {
        match command {
            FieldCommand::Replace(spec) => self.regenerate_with(spec),
            FieldCommand::Regenerate => self.regenerate_with(self.spec),
            FieldCommand::Reseed(seed) => {
                // Validate before touching the rng so a bad spec cannot
                // leave the seed and the field out of step
                self.spec.validate()?;
                self.seed = seed;
                self.rng = StdRng::seed_from_u64(seed);
                self.regenerate_with(self.spec)
            }
            edit => {
                let candidate = edited_spec(&self.spec, edit)?;
                self.regenerate_with(candidate)
            }
        }
    }

    /// Generate `candidate` and swap it in only if it is valid
    fn regenerate_with(&mut self, candidate: FieldSpec) -> Result<(), FieldConfigError> {
        let field = candidate.generate(&mut self.rng)?;

        self.spec = candidate;
        self.field = field;
        self.generation += 1;

        log::debug!(
            "Regenerated {} field #{}: {} points",
            self.spec.kind(),
            self.generation,
            self.field.len()
        );
        Ok(())
    }
}

/// Copy of `spec` with one parameter changed
fn edited_spec(spec: &FieldSpec, command: FieldCommand) -> Result<FieldSpec, FieldConfigError> {
    let mut spec = *spec;
    let kind = spec.kind();

    match (&mut spec, command) {
        (FieldSpec::Galaxy(c), FieldCommand::SetCount(v)) => c.count = v,
        (FieldSpec::Scatter(c), FieldCommand::SetCount(v)) => c.count = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetPointSize(v)) => c.point_size = v,
        (FieldSpec::Scatter(c), FieldCommand::SetPointSize(v)) => c.point_size = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetRotationSpeed(v)) => c.rotation_speed = v,
        (FieldSpec::Scatter(c), FieldCommand::SetRotationSpeed(v)) => c.rotation_speed = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetRadius(v)) => c.radius = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetBranchCount(v)) => c.branch_count = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetSpin(v)) => c.spin_factor = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetRandomness(v)) => c.randomness_amount = v,
        (FieldSpec::Galaxy(c), FieldCommand::SetRandomnessPower(v)) => c.randomness_power = v,
        _ => {
            return Err(FieldConfigError::Unsupported {
                parameter: command.parameter().unwrap_or("?"),
                kind,
            })
        }
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PointFieldConfig, ScatterConfig};

    fn small_galaxy() -> FieldSpec {
        FieldSpec::Galaxy(PointFieldConfig::default().with_count(200))
    }

    #[test]
    fn test_new_generates_field() {
        let manager = FieldManager::new(small_galaxy(), 9).unwrap();
        assert_eq!(manager.field().len(), 200);
        assert_eq!(manager.generation(), 0);
        assert_eq!(manager.seed(), 9);
    }

    #[test]
    fn test_new_rejects_invalid_spec() {
        let spec = FieldSpec::Galaxy(PointFieldConfig::default().with_count(0));
        assert!(matches!(FieldManager::new(spec, 0), Err(FieldConfigError::ZeroCount)));
    }

    #[test]
    fn test_edit_regenerates_in_full() {
        let mut manager = FieldManager::new(small_galaxy(), 1).unwrap();
        manager.apply(FieldCommand::SetCount(350)).unwrap();

        assert_eq!(manager.field().len(), 350);
        assert_eq!(manager.spec().count(), 350);
        assert_eq!(manager.generation(), 1);
    }

    #[test]
    fn test_invalid_edit_keeps_previous_field() {
        let mut manager = FieldManager::new(small_galaxy(), 1).unwrap();
        let before = manager.field().clone();
        let spec_before = *manager.spec();

        let result = manager.apply(FieldCommand::SetRadius(-3.0));
        assert_eq!(result, Err(FieldConfigError::NonPositiveRadius(-3.0)));
        assert_eq!(manager.field(), &before);
        assert_eq!(manager.spec(), &spec_before);
        assert_eq!(manager.generation(), 0);
    }

    #[test]
    fn test_reseed_reproduces_field() {
        let mut manager = FieldManager::new(small_galaxy(), 5).unwrap();
        let initial = manager.field().clone();

        manager.apply(FieldCommand::Regenerate).unwrap();
        assert_ne!(manager.field(), &initial);

        manager.apply(FieldCommand::Reseed(5)).unwrap();
        assert_eq!(manager.field(), &initial);
    }

    #[test]
    fn test_replace_switches_kind() {
        let mut manager = FieldManager::new(small_galaxy(), 1).unwrap();
        let scatter = FieldSpec::Scatter(ScatterConfig { count: 50, ..ScatterConfig::default() });
        manager.apply(FieldCommand::Replace(scatter)).unwrap();

        assert_eq!(manager.spec().kind(), "scatter");
        assert_eq!(manager.field().len(), 50);
    }

    #[test]
    fn test_galaxy_only_parameter_on_scatter() {
        let scatter = FieldSpec::Scatter(ScatterConfig { count: 10, ..ScatterConfig::default() });
        let mut manager = FieldManager::new(scatter, 1).unwrap();

        let result = manager.apply(FieldCommand::SetSpin(2.0));
        assert_eq!(
            result,
            Err(FieldConfigError::Unsupported { parameter: "spin_factor", kind: "scatter" })
        );
        assert_eq!(manager.generation(), 0);
    }

    #[test]
    fn test_fresh_power_used_for_offsets() {
        // A huge power collapses offsets toward the arm; the new value must
        // be the one the generator sees
        let spec = FieldSpec::Galaxy(
            PointFieldConfig::default().with_count(500).with_randomness(1.0, 1.0),
        );
        let mut manager = FieldManager::new(spec, 2).unwrap();
        manager.apply(FieldCommand::SetRandomnessPower(10_000.0)).unwrap();

        let near_plane = manager
            .field()
            .positions()
            .iter()
            .filter(|p| p.y.abs() < 1e-3)
            .count();
        assert!(near_plane > 490, "only {} points near the plane", near_plane);
    }
}
