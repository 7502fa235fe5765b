/// Projection — the other half of the frame transform.
///
/// The camera only produces the view matrix; the renderer pairs it with
/// one of these when building the frame's view-projection transform.
/// The caller owns the choice and the parameters (FOV, aspect, clip
/// planes) — typically recomputed on window resize.

use glam::Mat4;

/// Perspective or orthographic projection configuration.
///
/// Angles in radians, distances in world units. Produces right-handed
/// matrices, matching [`crate::Camera::view_matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view.
    Perspective {
        /// Vertical field of view, radians
        fov_y: f32,
        /// Width / height ratio of the viewport
        aspect: f32,
        /// Near clip plane distance
        z_near: f32,
        /// Far clip plane distance
        z_far: f32,
    },
    /// Orthographic projection centered on the view axis.
    Orthographic {
        /// Total view volume width, world units
        width: f32,
        /// Total view volume height, world units
        height: f32,
        /// Near clip plane distance
        z_near: f32,
        /// Far clip plane distance
        z_far: f32,
    },
}

impl Projection {
    /// Projection matrix for this configuration.
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Perspective { fov_y, aspect, z_near, z_far } => {
                Mat4::perspective_rh(fov_y, aspect, z_near, z_far)
            }
            Self::Orthographic { width, height, z_near, z_far } => {
                let half_width = width * 0.5;
                let half_height = height * 0.5;
                Mat4::orthographic_rh(
                    -half_width, half_width,
                    -half_height, half_height,
                    z_near, z_far,
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
