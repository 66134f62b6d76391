//! WebGPU rendering module
//!
//! The scene is built as flat-coloured triangles in screen pixels; the
//! pipeline maps them to NDC and draws them in one pass.

pub mod camera;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::{RenderError, RenderState};
pub use scene::{DamagePopup, build_scene};
pub use vertex::Vertex;
