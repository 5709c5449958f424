//! Renderer errors. All of these surface at setup time; the per-frame
//! path is pure math and cannot fail on its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("Program link failed: {0}")]
    ProgramLink(String),
    #[error("Required attribute '{0}' not found")]
    MissingAttribute(&'static str),
    /// Raised by real GL backends when the offscreen attachment fails the
    /// completeness check; the headless backend never produces it.
    #[error("Framebuffer incomplete (status 0x{0:x})")]
    IncompleteFramebuffer(u32),
    #[error("Invalid viewport {0}x{1}")]
    InvalidViewport(u32, u32),
    #[error("Texture data inconsistent ({0}x{1})")]
    InvalidTexture(u32, u32),
}

pub type RenderResult<T> = Result<T, RenderError>;
