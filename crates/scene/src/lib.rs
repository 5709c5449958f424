//! Scene content for the cube demo: geometry, animation state and
//! CPU-side texture sources.

pub mod mesh;
pub mod spin;
pub mod texture;
