/// RenderView — per-frame snapshot of the camera outputs.
///
/// Created by `Camera::render_view()`. Contains the view and projection
/// matrices for the frame's transform plus the target position for
/// orbit/debug visualization (e.g. rendering a target marker).
///
/// Ephemeral: lives for one frame. No Arc, no Mutex.
/// Shareable: the caller can pass the same RenderView to multiple
/// passes while continuing to mutate the camera.

use glam::{Mat4, Vec3};

/// Immutable camera snapshot for one frame.
///
/// Created exclusively by [`crate::Camera::render_view`].
#[derive(Debug, Clone)]
pub struct RenderView {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    target_position: Vec3,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only Camera::render_view creates these).
    pub(crate) fn new(view_matrix: Mat4, projection_matrix: Mat4, target_position: Vec3) -> Self {
        Self {
            view_matrix,
            projection_matrix,
            target_position,
        }
    }

    /// View matrix at the time of the snapshot.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix the snapshot was paired with.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Orbit target position at the time of the snapshot.
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
