//! Orbit camera
//!
//! Spherical coordinates around a target: `yaw` about +Y measured from +Z,
//! `pitch` as elevation above the XZ plane, and a distance.

use galaxy_input::OrbitControl;
use galaxy_math::{mat4, Mat4, Vec3};

/// Keeps the camera off the poles, where the view's up vector degenerates
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera orbiting a target point
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pose restored by [`OrbitCamera::reset`]
    home: (Vec3, Vec3),
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(3.0, 3.0, 3.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Camera at `eye` looking at `target`
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            target,
            distance: 1.0,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: 0.1,
            max_distance: 100.0,
            home: (eye, target),
        };
        camera.set_pose(eye, target);
        camera
    }

    /// Builder: clamp the orbit distance
    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
        self
    }

    fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.distance = offset.length().max(f32::EPSILON);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Return to the pose the camera was created with
    pub fn reset(&mut self) {
        let (eye, target) = self.home;
        self.set_pose(eye, target);
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.target, Vec3::Y)
    }
}

impl OrbitControl for OrbitCamera {
    fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn dolly(&mut self, scale: f32) {
        self.distance = (self.distance * scale).clamp(self.min_distance, self.max_distance);
    }

    fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_default_pose() {
        let camera = OrbitCamera::default();
        assert!(approx(camera.eye(), Vec3::new(3.0, 3.0, 3.0)), "{:?}", camera.eye());
        assert!((camera.distance() - 27.0f32.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = OrbitCamera::default();
        let before = camera.distance();
        camera.orbit(1.0, 0.3);
        assert!(((camera.eye() - camera.target).length() - before).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_clamped_below_pole() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch() < std::f32::consts::FRAC_PI_2);
        assert!(camera.view_matrix().iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_dolly_clamped() {
        let mut camera = OrbitCamera::default().with_distance_limits(1.0, 10.0);
        camera.dolly(100.0);
        assert_eq!(camera.distance(), 10.0);
        camera.dolly(0.0001);
        assert_eq!(camera.distance(), 1.0);
    }

    #[test]
    fn test_reset_restores_home() {
        let mut camera = OrbitCamera::default();
        camera.orbit(2.0, -0.5);
        camera.dolly(0.5);
        camera.reset();
        assert!(approx(camera.eye(), Vec3::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn test_view_matrix_maps_target_in_front() {
        let camera = OrbitCamera::default();
        let p = mat4::transform_point(camera.view_matrix(), camera.target);
        // Right-handed view space looks down -Z
        assert!(p.z < 0.0);
        assert!(p.x.abs() < EPSILON && p.y.abs() < EPSILON);
    }
}
