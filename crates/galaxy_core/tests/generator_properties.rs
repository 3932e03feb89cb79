//! Integration tests for the point field generators
//!
//! Exercises the public API the viewer relies on: buffer shapes, determinism
//! under a seed, boundary configs and the radius-to-color mapping.

use std::f32::consts::TAU;

use galaxy_core::color::radial_color;
use galaxy_core::{
    generate_galaxy, generate_scatter, FieldSpec, PointFieldConfig, PresetLibrary, ScatterConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn configs() -> Vec<PointFieldConfig> {
    vec![
        PointFieldConfig::default().with_count(1),
        PointFieldConfig::default().with_count(1_000),
        PointFieldConfig::default()
            .with_count(3_333)
            .with_branches(1)
            .with_spin(-5.0)
            .with_randomness(2.0, 1.0),
        PointFieldConfig::default()
            .with_count(777)
            .with_branches(20)
            .with_radius(0.01)
            .with_randomness(0.0, 10.0),
    ]
}

#[test]
fn test_buffers_hold_three_floats_per_point() {
    let mut rng = StdRng::seed_from_u64(1);
    for config in configs() {
        let field = generate_galaxy(&config, &mut rng).unwrap();
        let expected = 3 * config.count as usize;

        assert_eq!(field.len(), config.count as usize);
        assert_eq!(field.position_buffer().len(), expected);
        assert_eq!(field.color_buffer().len(), expected);
        assert!(field.is_finite());
    }
}

#[test]
fn test_same_seed_same_field() {
    for config in configs() {
        let a = generate_galaxy(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_galaxy(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_different_seed_different_field() {
    let config = PointFieldConfig::default().with_count(100);
    let a = generate_galaxy(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate_galaxy(&config, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_single_point_on_first_branch() {
    let config = PointFieldConfig::default()
        .with_count(1)
        .with_spin(0.0)
        .with_randomness(0.0, 1.0);
    let field = generate_galaxy(&config, &mut StdRng::seed_from_u64(4)).unwrap();

    assert_eq!(field.len(), 1);
    let p = field.positions()[0];
    // Branch 0 has angle 0, so with no spin the point is on +X
    assert!(p.x >= 0.0);
    assert!(p.z.abs() < 1e-6);
    assert_eq!(p.y, 0.0);
}

#[test]
fn test_color_depends_only_on_normalized_radius() {
    let config = PointFieldConfig::default()
        .with_count(2_000)
        .with_spin(0.7)
        .with_randomness(0.0, 1.0);
    let field = generate_galaxy(&config, &mut StdRng::seed_from_u64(8)).unwrap();

    for (position, color) in field.iter() {
        let radius = position.x.hypot(position.z);
        let expected = radial_color(radius / config.radius);
        for c in 0..3 {
            assert!((color[c] - expected[c]).abs() < 1e-3, "{:?} vs {:?}", color, expected);
        }
    }
}

#[test]
fn test_points_follow_arm_assignment() {
    let config = PointFieldConfig::default()
        .with_count(10)
        .with_branches(5)
        .with_spin(0.0)
        .with_randomness(0.0, 1.0);
    let field = generate_galaxy(&config, &mut StdRng::seed_from_u64(6)).unwrap();

    for (i, position) in field.positions().iter().enumerate() {
        if position.x.hypot(position.z) < 1e-3 {
            continue;
        }
        let expected = TAU * (i % 5) as f32 / 5.0;
        let angle = position.z.atan2(position.x).rem_euclid(TAU);
        let diff = (angle - expected).abs();
        assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "point {} at {}", i, angle);
    }
}

#[test]
fn test_scatter_buffers() {
    let config = ScatterConfig { count: 500, ..ScatterConfig::default() };
    let field = generate_scatter(&config, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(field.position_buffer().len(), 1_500);
    assert_eq!(field.color_buffer().len(), 1_500);
    for position in field.positions() {
        assert!(position.x.abs() <= 5.0 && position.y.abs() <= 5.0 && position.z.abs() <= 5.0);
    }
}

#[test]
fn test_every_builtin_preset_generates() {
    let mut rng = StdRng::seed_from_u64(0);
    for preset in &PresetLibrary::builtin().presets {
        let spec: FieldSpec = preset.spec;
        let field = spec.generate(&mut rng).unwrap();
        assert_eq!(field.len(), spec.count() as usize, "preset {}", preset.name);
        assert_eq!(field.point_size(), spec.point_size());
    }
}
