//! Backend-agnostic frame composition for the spinning-cube demo.
//!
//! Each frame is two passes: the plain-color cube into an offscreen target,
//! then the textured cube onto the surface. The GPU/window glue lives
//! behind [`RenderBackend`].

pub mod backend;
pub mod context;
pub mod error;
pub mod frame;
pub mod uniforms;

pub use backend::{HeadlessBackend, RecordedPass, RenderBackend};
pub use context::{ProgramLocations, RawHandle, RenderContext};
pub use error::{RenderError, RenderResult};
pub use frame::{FramePass, PassTarget};
pub use uniforms::SceneUniforms;

use mathlib::Mat4;
use scene::mesh::{self, StripMesh};
use scene::spin::Spin;
use scene::texture::TextureData;

/// Offscreen target dimensions.
pub const OFFSCREEN_SIZE: (u32, u32) = (256, 256);

/// Frustum shared by both render targets.
const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.01;
const Z_FAR: f32 = 100.0;

/// How far the cube sits from the viewpoint.
const CUBE_DISTANCE: f32 = 2.0;

const VERTEX_SHADER: &str = include_str!("shaders/cube.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/cube.frag");

/// Owns the render context and per-target projections; composes the two
/// passes of each frame and hands them to a backend.
#[derive(Debug)]
pub struct Renderer {
    ctx: RenderContext,
    projection: Mat4,
    projection_offscreen: Mat4,
    mesh: StripMesh,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Compile the program and create the offscreen target and the second
    /// texture source up front. Fails on a zero-sized surface and on any
    /// backend setup error.
    pub fn new<B: RenderBackend>(backend: &mut B, width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport(width, height));
        }

        let program = backend.create_program(VERTEX_SHADER, FRAGMENT_SHADER)?;
        let locations = backend.resolve_locations(program)?;
        if locations.position < 0 {
            return Err(RenderError::MissingAttribute("a_v4Position"));
        }

        let (ow, oh) = OFFSCREEN_SIZE;
        let offscreen_target = backend.create_offscreen_target(ow, oh)?;
        let texture = backend.create_texture(&TextureData::color_bars(640, 240))?;

        log::info!("Renderer ready: surface {width}x{height}, offscreen {ow}x{oh}");

        Ok(Self {
            ctx: RenderContext {
                program,
                locations,
                offscreen_target,
                offscreen_size: OFFSCREEN_SIZE,
                texture,
            },
            projection: perspective_for(width, height),
            projection_offscreen: perspective_for(ow, oh),
            mesh: mesh::cube(),
            width,
            height,
        })
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Rebuild the surface projection after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.projection = perspective_for(self.width, self.height);
        log::debug!("Projection rebuilt for {}x{}", self.width, self.height);
    }

    /// Describe both passes for the current spin state. The cube spins with
    /// the same convention on the surface and in the offscreen target.
    pub fn compose_frame(&self, spin: &Spin) -> [FramePass<'_>; 2] {
        let model_view = spin.model_view(CUBE_DISTANCE);
        [
            FramePass {
                label: "offscreen-cube",
                target: PassTarget::Offscreen(self.ctx.offscreen_target),
                viewport: self.ctx.offscreen_size,
                clear_color: [0.5, 0.5, 0.5, 1.0],
                uniforms: SceneUniforms::new(self.projection_offscreen, model_view, 0.0),
                mesh: &self.mesh,
                texture: None,
            },
            FramePass {
                label: "surface-cube",
                target: PassTarget::Surface,
                viewport: (self.width, self.height),
                clear_color: [0.0, 0.0, 1.0, 1.0],
                uniforms: SceneUniforms::new(self.projection, model_view, 1.0),
                mesh: &self.mesh,
                texture: Some(self.ctx.texture),
            },
        ]
    }

    /// Draw one frame: both passes, then present.
    pub fn render_frame<B: RenderBackend>(
        &self,
        backend: &mut B,
        spin: &Spin,
    ) -> RenderResult<()> {
        for pass in self.compose_frame(spin).iter() {
            backend.draw_pass(pass)?;
        }
        backend.present()
    }
}

fn perspective_for(width: u32, height: u32) -> Mat4 {
    Mat4::perspective(FOV_Y_DEGREES, width as f32 / height as f32, Z_NEAR, Z_FAR)
}
