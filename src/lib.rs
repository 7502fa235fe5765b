/*!
# Freefly Camera

Free-fly / orbit camera for real-time 3D renderers.

This crate tracks a viewpoint's position and orientation and derives the
view matrix for the graphics pipeline. The camera is a plain mutable
value: the render loop owns it, drives it with angle deltas (radians)
and distance deltas (world units) computed by the input layer, and reads
back the view transform each frame.

## Architecture

- **Camera**: position + orthonormal basis (forward/right/up) with
  first-person (look) and third-person (orbit-around-target) rotations
- **Projection**: perspective or orthographic projection matrix
- **RenderView**: per-frame immutable snapshot of the camera outputs

The crate does NOT store or manage cameras. They are tools provided to
the caller, owned and driven by the render loop — no singletons, no
shared state.
*/

// Internal modules
mod error;
pub mod camera;

pub use error::{CameraError, Result};
pub use camera::{Camera, Projection, RenderView};

// Re-export math library at crate root
pub use glam;
