//! Uniform payloads in the exact byte layout the GPU boundary expects.

use bytemuck::{Pod, Zeroable};
use mathlib::Mat4;

/// Per-draw uniform block: projection, model-view, texture mix factor.
///
/// Matrices are 16 column-major floats each, so the byte image is
/// positionally what a GL-style `mat4` uniform upload (transpose off)
/// consumes. Padded to a 16-byte multiple.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub projection: [f32; 16],
    pub model_view: [f32; 16],
    pub texture_mix: f32,
    _pad: [f32; 3],
}

impl SceneUniforms {
    pub fn new(projection: Mat4, model_view: Mat4, texture_mix: f32) -> Self {
        Self {
            projection: projection.to_cols_array(),
            model_view: model_view.to_cols_array(),
            texture_mix,
            _pad: [0.0; 3],
        }
    }

    /// Byte view suitable for a buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_image_leads_with_projection_then_model_view() {
        let proj = Mat4::perspective(45.0, 1.0, 0.01, 100.0);
        let mv = Mat4::from_translation(0.0, 0.0, -2.0);
        let u = SceneUniforms::new(proj, mv, 1.0);

        let floats: &[f32] = bytemuck::cast_slice(u.as_bytes());
        assert_eq!(floats.len(), 36);
        assert_eq!(&floats[..16], &proj.to_cols_array());
        assert_eq!(&floats[16..32], &mv.to_cols_array());
        assert_eq!(floats[32], 1.0);
    }

    #[test]
    fn block_size_is_sixteen_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 144);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    }
}
