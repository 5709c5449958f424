//! Math for the renderer: column-major 4x4 transforms.

pub mod mat4;

pub use mat4::Mat4;
