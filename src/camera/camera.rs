/// Camera — free-fly / orbit viewpoint for a real-time renderer.
///
/// Owns a world-space position and an orthonormal direction basis
/// (forward/right/up) plus the pivot distance used by orbit mode. The
/// caller drives it with angle deltas (radians) and distance deltas
/// (world units) once or a few times per frame, then reads back the
/// view matrix.
///
/// The unchecked mutators perform no validation: degenerate inputs
/// (zero-length vector before a normalize, purely vertical forward in
/// `move_forward`) are caller preconditions. `try_set` is the checked
/// construction path.

use glam::{Mat3, Mat4, Vec3};
use crate::error::{CameraError, Result};
use super::projection::Projection;
use super::render_view::RenderView;

/// Free-fly / orbit camera.
///
/// Invariant: `forward`, `right` and `up` form a consistently-handed
/// orthonormal basis with `up = right × forward`, maintained
/// incrementally by the rotation operations. Two deliberate carve-outs
/// from that invariant are kept for behavioral fidelity with the
/// renderer this camera was built for:
///
/// - after `set()` the `right` vector is unnormalized until the next
///   rotation re-derives it (only its direction is ever used);
/// - `rotate_first_person_oz` never reassigns `forward` and derives
///   `up` from a world-Y-rotated forward candidate, so a roll can
///   leave `up` non-orthogonal to the actual `forward`. Callers that
///   roll and need a clean basis call [`Camera::renormalize`].
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    distance_to_target: f32,
}

impl Default for Camera {
    /// Fixed starting pose: standing at (0, 2, 5) looking down −Z,
    /// orbit pivot 2 units ahead.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 5.0),
            forward: Vec3::new(0.0, 0.0, -1.0),
            right: Vec3::X,
            up: Vec3::Y,
            distance_to_target: 2.0,
        }
    }
}

impl Camera {
    /// Create a camera from a look-at triple.
    ///
    /// `distance_to_target` keeps the default value; configure it with
    /// [`Camera::set_distance_to_target`] before orbiting.
    ///
    /// Precondition: `center != position` and `up` not parallel to the
    /// view direction. Use [`Camera::try_set`] on an existing camera to
    /// have these checked.
    pub fn look_at(position: Vec3, center: Vec3, up: Vec3) -> Self {
        let mut camera = Self::default();
        camera.set(position, center, up);
        camera
    }

    /// Re-initialize position and orientation from a look-at triple.
    ///
    /// Fully overwrites the prior orientation; `distance_to_target` is
    /// untouched. No validation — see [`Camera::try_set`].
    pub fn set(&mut self, position: Vec3, center: Vec3, up: Vec3) {
        self.position = position;
        self.forward = (center - position).normalize();
        // Unnormalized on purpose: only the direction feeds the derived
        // up, and the next rotation re-derives right as unit length.
        self.right = self.forward.cross(up);
        self.up = self.right.cross(self.forward);
    }

    /// Checked variant of [`Camera::set`].
    ///
    /// Fails (and leaves the camera unchanged) when `center` coincides
    /// with `position` or `up` is parallel to the view direction —
    /// either would zero a vector that `set` normalizes.
    pub fn try_set(&mut self, position: Vec3, center: Vec3, up: Vec3) -> Result<()> {
        let view_dir = center - position;
        if view_dir.length_squared() < f32::EPSILON {
            return Err(Self::log_and_return_error(CameraError::DegenerateLookAt(
                "center coincides with position".to_string(),
            )));
        }
        if view_dir.normalize().cross(up).length_squared() < f32::EPSILON {
            return Err(Self::log_and_return_error(CameraError::DegenerateLookAt(
                "up is parallel to the view direction".to_string(),
            )));
        }
        self.set(position, center, up);
        Ok(())
    }

    // ===== TRANSLATION — shift position, basis untouched =====

    /// Walk forward: move along `forward` projected onto the horizontal
    /// plane, so the camera height never changes regardless of pitch.
    ///
    /// Precondition: `forward` has a nonzero horizontal component
    /// (undefined when looking straight up or down).
    pub fn move_forward(&mut self, distance: f32) {
        let dir = Vec3::new(self.forward.x, 0.0, self.forward.z).normalize();
        self.position += dir * distance;
    }

    /// Move along the view direction (height changes when pitched).
    pub fn translate_forward(&mut self, distance: f32) {
        self.position += self.forward.normalize() * distance;
    }

    /// Move along the camera's up vector.
    pub fn translate_upward(&mut self, distance: f32) {
        self.position += self.up.normalize() * distance;
    }

    /// Move along the camera's right vector.
    ///
    /// Not ground-projected: with a rolled camera this changes height.
    pub fn translate_right(&mut self, distance: f32) {
        self.position += self.right.normalize() * distance;
    }

    // ===== FIRST-PERSON ROTATION — in place, position untouched =====

    /// Pitch: rotate the view about the current right axis.
    pub fn rotate_first_person_ox(&mut self, angle: f32) {
        let rotation = Mat3::from_axis_angle(self.right.normalize(), angle);
        self.forward = (rotation * self.forward).normalize();
        // right is its own rotation axis, so the field stays as-is;
        // the rotated copy is only renormalized to derive the new up.
        let rotated_right = rotation * self.right;
        self.up = rotated_right.normalize().cross(self.forward);
    }

    /// Yaw: rotate the view about the world vertical (0, 1, 0).
    pub fn rotate_first_person_oy(&mut self, angle: f32) {
        let rotation = Mat3::from_rotation_y(angle);
        self.forward = (rotation * self.forward).normalize();
        self.right = (rotation * self.right).normalize();
        self.up = self.right.cross(self.forward);
    }

    /// Roll: tilt the view about the current forward axis.
    ///
    /// `forward` is never reassigned here; the world-Y-rotated
    /// candidate only feeds the derived up (see the type-level docs for
    /// the resulting basis caveat).
    pub fn rotate_first_person_oz(&mut self, angle: f32) {
        let forward_candidate = Mat3::from_rotation_y(angle) * self.forward;
        let rotation = Mat3::from_axis_angle(self.forward.normalize(), angle);
        self.right = (rotation * self.right).normalize();
        self.up = self.right.cross(forward_candidate.normalize());
    }

    // ===== THIRD-PERSON ROTATION — orbit around the target point =====

    /// Orbit pitch: pivot around the target point, `distance_to_target`
    /// units ahead.
    pub fn rotate_third_person_ox(&mut self, angle: f32) {
        self.translate_forward(self.distance_to_target);
        self.rotate_first_person_ox(angle);
        self.translate_forward(-self.distance_to_target);
    }

    /// Orbit yaw: pivot around the target point.
    pub fn rotate_third_person_oy(&mut self, angle: f32) {
        self.translate_forward(self.distance_to_target);
        self.rotate_first_person_oy(angle);
        self.translate_forward(-self.distance_to_target);
    }

    /// Orbit roll: pivot around the target point.
    pub fn rotate_third_person_oz(&mut self, angle: f32) {
        self.translate_forward(self.distance_to_target);
        self.rotate_first_person_oz(angle);
        self.translate_forward(-self.distance_to_target);
    }

    // ===== ACCESSORS — pure, no side effects =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Right axis of the basis.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Up axis of the basis.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Orbit pivot distance, in world units.
    pub fn distance_to_target(&self) -> f32 {
        self.distance_to_target
    }

    /// Set the orbit pivot distance (world units, expected >= 0).
    pub fn set_distance_to_target(&mut self, distance: f32) {
        self.distance_to_target = distance;
    }

    /// View matrix: right-handed look-at built from the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// The orbit pivot point, `distance_to_target` units along
    /// `forward`.
    pub fn target_position(&self) -> Vec3 {
        self.position + self.forward * self.distance_to_target
    }

    /// Snapshot the camera outputs for one frame, paired with a
    /// projection.
    pub fn render_view(&self, projection: &Projection) -> RenderView {
        RenderView::new(self.view_matrix(), projection.matrix(), self.target_position())
    }

    // ===== HARDENING — explicit, never called implicitly =====

    /// Re-orthonormalize the basis (Gram-Schmidt), keeping the current
    /// forward direction. Counteracts incremental float drift and the
    /// roll caveat; only runs when the caller asks.
    pub fn renormalize(&mut self) {
        self.forward = self.forward.normalize();
        self.right = self.forward.cross(self.up).normalize();
        self.up = self.right.cross(self.forward);
    }

    /// Whether the basis is orthonormal within `tolerance` (unit
    /// lengths, pairwise dot products near zero).
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        (self.forward.length() - 1.0).abs() <= tolerance
            && (self.right.length() - 1.0).abs() <= tolerance
            && (self.up.length() - 1.0).abs() <= tolerance
            && self.forward.dot(self.right).abs() <= tolerance
            && self.forward.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }

    /// Log checked-path errors before returning them (internal use).
    fn log_and_return_error(error: CameraError) -> CameraError {
        log::error!("{}", error);
        error
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
