//! 4x4 Matrix utilities
//!
//! Column-major matrices (`m[column][row]`) laid out the way WGSL expects
//! `mat4x4<f32>` uniforms.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by axes `p1` and `p2`.
///
/// Rotates axis `p1` toward axis `p2` by `angle` radians
/// (0=X, 1=Y, 2=Z).
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Rotation about the Y axis (right-handed: +Z turns toward +X)
pub fn rotation_y(angle: f32) -> Mat4 {
    plane_rotation(angle, 2, 0)
}

/// Transform a point (w = 1) by a 4x4 matrix, dropping the w component
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Right-handed perspective projection with a `[0, 1]` depth range
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, far * near * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, p), p));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        use std::f32::consts::FRAC_PI_2;

        let m = rotation_y(FRAC_PI_2);

        // X goes to -Z
        let result = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(result, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", result);

        // Z goes to X
        let result = transform_point(m, Vec3::Z);
        assert!(vec_approx_eq(result, Vec3::X), "got {:?}", result);

        // Y untouched
        assert!(vec_approx_eq(transform_point(m, Vec3::Y), Vec3::Y));
    }

    #[test]
    fn test_rotations_compose() {
        use std::f32::consts::FRAC_PI_4;

        let r45 = rotation_y(FRAC_PI_4);
        let r90 = rotation_y(FRAC_PI_4 * 2.0);

        let result1 = transform_point(r45, transform_point(r45, Vec3::X));
        let result2 = transform_point(r90, Vec3::X);
        assert!(vec_approx_eq(result1, result2), "Composed: {:?}, Direct: {:?}", result1, result2);
    }

    #[test]
    fn test_look_at_moves_target_onto_negative_z() {
        let eye = Vec3::new(3.0, 3.0, 3.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);
        let target_in_view = transform_point(view, Vec3::ZERO);

        let distance = eye.length();
        assert!(vec_approx_eq(target_in_view, Vec3::new(0.0, 0.0, -distance)),
            "got {:?}", target_in_view);
    }

    #[test]
    fn test_perspective_depth_range() {
        let near = 0.1;
        let far = 100.0;
        let proj = perspective(75f32.to_radians(), 1.5, near, far);

        // z_clip / w_clip for a point on the near plane is 0, on the far plane 1
        let depth = |z: f32| {
            let clip_z = proj[2][2] * z + proj[3][2];
            let clip_w = proj[2][3] * z;
            clip_z / clip_w
        };
        assert!(depth(-near).abs() < EPSILON);
        assert!((depth(-far) - 1.0).abs() < EPSILON);
    }
}
