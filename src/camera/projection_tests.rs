use std::f32::consts::FRAC_PI_4;

use glam::Mat4;
use super::*;

// ============================================================================
// Projection::matrix
// ============================================================================

#[test]
fn test_perspective_matrix() {
    let projection = Projection::Perspective {
        fov_y: FRAC_PI_4,
        aspect: 16.0 / 9.0,
        z_near: 0.1,
        z_far: 100.0,
    };

    let expected = Mat4::perspective_rh(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    assert!(projection.matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_orthographic_matrix_is_centered() {
    let projection = Projection::Orthographic {
        width: 20.0,
        height: 10.0,
        z_near: 0.1,
        z_far: 100.0,
    };

    let expected = Mat4::orthographic_rh(-10.0, 10.0, -5.0, 5.0, 0.1, 100.0);
    assert!(projection.matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_projection_is_copy_and_comparable() {
    let projection = Projection::Perspective {
        fov_y: FRAC_PI_4,
        aspect: 1.0,
        z_near: 0.5,
        z_far: 500.0,
    };
    let copied = projection;
    assert_eq!(projection, copied);
}
