//! Per-frame pass descriptions handed to the backend.

use scene::mesh::StripMesh;

use crate::context::RawHandle;
use crate::uniforms::SceneUniforms;

/// Where a pass draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassTarget {
    /// Offscreen framebuffer object.
    Offscreen(RawHandle),
    /// The window surface.
    Surface,
}

/// One render pass: target, viewport, clear color, uniforms and geometry.
#[derive(Debug)]
pub struct FramePass<'a> {
    pub label: &'static str,
    pub target: PassTarget,
    pub viewport: (u32, u32),
    pub clear_color: [f32; 4],
    pub uniforms: SceneUniforms,
    pub mesh: &'a StripMesh,
    /// Sampled when `uniforms.texture_mix > 0`.
    pub texture: Option<RawHandle>,
}
