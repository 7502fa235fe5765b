use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use crate::{Camera, Projection};
use super::*;

fn create_test_projection() -> Projection {
    Projection::Perspective {
        fov_y: FRAC_PI_4,
        aspect: 16.0 / 9.0,
        z_near: 0.1,
        z_far: 100.0,
    }
}

// ============================================================================
// Snapshot contents
// ============================================================================

#[test]
fn test_render_view_snapshots_camera_outputs() {
    let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let projection = create_test_projection();

    let view = camera.render_view(&projection);

    assert_eq!(*view.view_matrix(), camera.view_matrix());
    assert_eq!(*view.projection_matrix(), projection.matrix());
    assert_eq!(view.target_position(), camera.target_position());
}

#[test]
fn test_view_projection_matrix() {
    let camera = Camera::default();
    let projection = create_test_projection();

    let view = camera.render_view(&projection);

    let expected = projection.matrix() * camera.view_matrix();
    assert_eq!(view.view_projection_matrix(), expected);
}

#[test]
fn test_render_view_is_a_snapshot() {
    let mut camera = Camera::default();
    let view = camera.render_view(&create_test_projection());
    let target_at_capture = view.target_position();

    // mutating the camera afterwards must not affect the snapshot
    camera.rotate_first_person_oy(1.0);
    camera.translate_forward(3.0);

    assert_eq!(view.target_position(), target_at_capture);
    assert_ne!(view.target_position(), camera.target_position());
}

// ============================================================================
// Clone
// ============================================================================

#[test]
fn test_render_view_clone() {
    let camera = Camera::default();
    let view = camera.render_view(&create_test_projection());
    let cloned = view.clone();

    assert_eq!(*cloned.view_matrix(), *view.view_matrix());
    assert_eq!(cloned.target_position(), view.target_position());
}
