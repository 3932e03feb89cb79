//! Point field generators
//!
//! Both generators validate their config first and return a
//! [`FieldConfigError`] without producing anything when it is rejected.
//! Sampling order per point is fixed, so a seeded source reproduces the
//! same field exactly.

use std::f32::consts::TAU;

use galaxy_math::Vec3;

use crate::color::radial_color;
use crate::config::{FieldConfigError, FieldSpec, PointFieldConfig, ScatterConfig};
use crate::point_field::PointField;
use crate::random::RandomSource;

/// Generate a spiral galaxy
///
/// Point `i` sits on arm `i % branch_count` at a uniformly sampled distance
/// `r` in `[0, radius]`, twisted by `r * spin_factor`, then pushed off the arm
/// on each axis by `±u^randomness_power * randomness_amount`. Larger powers
/// pull the offsets toward zero, giving tight arms with a sparse halo.
/// Color hue runs from 0 to 360 degrees with `r / radius`.
pub fn generate_galaxy<R: RandomSource + ?Sized>(
    config: &PointFieldConfig,
    rng: &mut R,
) -> Result<PointField, FieldConfigError> {
    config.validate()?;

    let count = config.count as usize;
    let branch_count = config.branch_count as usize;
    let mut field = PointField::with_capacity(count, config.point_size);

    for i in 0..count {
        let branch = i % branch_count;
        let branch_angle = TAU * branch as f32 / config.branch_count as f32;

        let radius = rng.next_unit() * config.radius;
        let spin_angle = radius * config.spin_factor;

        let offset_x = random_offset(rng, config);
        let offset_y = random_offset(rng, config);
        let offset_z = random_offset(rng, config);

        let angle = branch_angle + spin_angle;
        let position = Vec3::new(
            angle.cos() * radius + offset_x,
            offset_y,
            angle.sin() * radius + offset_z,
        );

        field.push(position, radial_color(radius / config.radius));
    }

    Ok(field)
}

/// Offset from the arm along one axis
fn random_offset<R: RandomSource + ?Sized>(rng: &mut R, config: &PointFieldConfig) -> f32 {
    let magnitude = rng.next_unit().powf(config.randomness_power) * config.randomness_amount;
    let sign = if rng.next_unit() < 0.5 { 1.0 } else { -1.0 };
    sign * magnitude
}

/// Generate a uniform scatter inside an axis-aligned box
pub fn generate_scatter<R: RandomSource + ?Sized>(
    config: &ScatterConfig,
    rng: &mut R,
) -> Result<PointField, FieldConfigError> {
    config.validate()?;

    let count = config.count as usize;
    let center = Vec3::from_array(config.center);
    let [hx, hy, hz] = config.half_extents;
    let mut field = PointField::with_capacity(count, config.point_size);

    for _ in 0..count {
        let jitter = Vec3::new(
            (rng.next_unit() * 2.0 - 1.0) * hx,
            (rng.next_unit() * 2.0 - 1.0) * hy,
            (rng.next_unit() * 2.0 - 1.0) * hz,
        );
        field.push(center + jitter, config.color);
    }

    Ok(field)
}

impl FieldSpec {
    /// Run the generator matching this spec
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PointField, FieldConfigError> {
        match self {
            FieldSpec::Galaxy(config) => generate_galaxy(config, rng),
            FieldSpec::Scatter(config) => generate_scatter(config, rng),
        }
    }
}
