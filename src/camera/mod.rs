//! Camera module — free-fly / orbit camera, projection, and render view.
//!
//! The camera is a plain mutable value owned by the caller's render
//! loop. The crate does NOT store or manage cameras — each instance is
//! independently owned, driven strictly sequentially, and never shared
//! across threads.

mod camera;
mod projection;
mod render_view;

pub use camera::Camera;
pub use projection::Projection;
pub use render_view::RenderView;
