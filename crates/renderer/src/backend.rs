//! Backend seam between frame composition and the GPU/window glue.

use scene::texture::TextureData;

use crate::context::{ProgramLocations, RawHandle};
use crate::error::{RenderError, RenderResult};
use crate::frame::{FramePass, PassTarget};

/// What a real GL/EGL (or wgpu) layer must provide. Setup methods run once
/// at startup; `draw_pass`/`present` run every frame.
pub trait RenderBackend {
    /// Compile both shaders and link them into a program.
    fn create_program(&mut self, vertex_src: &str, fragment_src: &str) -> RenderResult<RawHandle>;

    /// Resolve attribute/uniform locations on a linked program.
    fn resolve_locations(&mut self, program: RawHandle) -> RenderResult<ProgramLocations>;

    /// Create a color-attachment framebuffer of the given size.
    fn create_offscreen_target(&mut self, width: u32, height: u32) -> RenderResult<RawHandle>;

    /// Upload CPU texture data.
    fn create_texture(&mut self, data: &TextureData) -> RenderResult<RawHandle>;

    /// Bind the pass target, set viewport, clear, upload uniforms, draw.
    fn draw_pass(&mut self, pass: &FramePass<'_>) -> RenderResult<()>;

    /// Swap buffers / finish the frame.
    fn present(&mut self) -> RenderResult<()>;
}

/// A `draw_pass` call as seen by [`HeadlessBackend`].
#[derive(Clone, Debug)]
pub struct RecordedPass {
    pub label: &'static str,
    pub target: PassTarget,
    pub viewport: (u32, u32),
    pub clear_color: [f32; 4],
    pub uniforms: crate::uniforms::SceneUniforms,
    pub index_count: usize,
    pub textured: bool,
}

/// Records submitted work instead of talking to a GPU. Backs the headless
/// demo binary and the tests.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_handle: RawHandle,
    pub passes: Vec<RecordedPass>,
    pub frames_presented: u32,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_handle(&mut self) -> RawHandle {
        self.next_handle += 1;
        self.next_handle
    }
}

/// Names declared as `varying` in a GLSL ES 1.00 source.
fn varying_names(src: &str) -> Vec<&str> {
    src.lines()
        .filter_map(|line| line.trim().strip_prefix("varying "))
        .filter_map(|decl| decl.trim_end_matches(';').split_whitespace().last())
        .collect()
}

impl RenderBackend for HeadlessBackend {
    fn create_program(&mut self, vertex_src: &str, fragment_src: &str) -> RenderResult<RawHandle> {
        if vertex_src.trim().is_empty() {
            return Err(RenderError::ShaderCompile("empty vertex shader source".into()));
        }
        if fragment_src.trim().is_empty() {
            return Err(RenderError::ShaderCompile("empty fragment shader source".into()));
        }

        // Same rule a GL linker enforces: every varying the fragment stage
        // reads must be written by the vertex stage.
        let vertex_varyings = varying_names(vertex_src);
        for name in varying_names(fragment_src) {
            if !vertex_varyings.contains(&name) {
                return Err(RenderError::ProgramLink(format!(
                    "varying '{name}' not written by vertex shader"
                )));
            }
        }

        let program = self.alloc_handle();
        log::debug!("headless: linked program {program}");
        Ok(program)
    }

    fn resolve_locations(&mut self, program: RawHandle) -> RenderResult<ProgramLocations> {
        log::debug!("headless: resolving locations for program {program}");
        Ok(ProgramLocations {
            position: 0,
            fill_color: 1,
            tex_coord: 2,
            projection: 0,
            model_view: 1,
            texture_mix: 2,
            texture: 3,
        })
    }

    fn create_offscreen_target(&mut self, width: u32, height: u32) -> RenderResult<RawHandle> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport(width, height));
        }
        Ok(self.alloc_handle())
    }

    fn create_texture(&mut self, data: &TextureData) -> RenderResult<RawHandle> {
        if !data.is_valid() {
            return Err(RenderError::InvalidTexture(data.width, data.height));
        }
        log::debug!("headless: texture upload {}x{}", data.width, data.height);
        Ok(self.alloc_handle())
    }

    fn draw_pass(&mut self, pass: &FramePass<'_>) -> RenderResult<()> {
        self.passes.push(RecordedPass {
            label: pass.label,
            target: pass.target,
            viewport: pass.viewport,
            clear_color: pass.clear_color,
            uniforms: pass.uniforms,
            index_count: pass.mesh.indices.len(),
            textured: pass.texture.is_some(),
        });
        Ok(())
    }

    fn present(&mut self) -> RenderResult<()> {
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_shader_source_is_a_compile_error() {
        let mut backend = HeadlessBackend::new();
        let err = backend.create_program("", "void main() {}").unwrap_err();
        assert!(matches!(err, RenderError::ShaderCompile(_)));
    }

    #[test]
    fn unmatched_fragment_varying_is_a_link_error() {
        let vertex = "void main() { gl_Position = vec4(0.0); }";
        let fragment = "varying vec4 v_v4FillColor;\nvoid main() { gl_FragColor = v_v4FillColor; }";
        let mut backend = HeadlessBackend::new();
        let err = backend.create_program(vertex, fragment).unwrap_err();
        assert!(matches!(err, RenderError::ProgramLink(_)));
    }

    #[test]
    fn matching_varyings_link() {
        let vertex = "varying vec2 v_v2TexCoord;\nvoid main() { gl_Position = vec4(0.0); }";
        let fragment = "varying vec2 v_v2TexCoord;\nvoid main() {}";
        let mut backend = HeadlessBackend::new();
        assert!(backend.create_program(vertex, fragment).is_ok());
    }

    #[test]
    fn zero_size_offscreen_target_is_rejected() {
        let mut backend = HeadlessBackend::new();
        let err = backend.create_offscreen_target(0, 256).unwrap_err();
        assert!(matches!(err, RenderError::InvalidViewport(0, 256)));
    }

    #[test]
    fn handles_are_distinct() {
        let mut backend = HeadlessBackend::new();
        let a = backend.create_offscreen_target(8, 8).unwrap();
        let b = backend.create_offscreen_target(8, 8).unwrap();
        assert_ne!(a, b);
    }
}
