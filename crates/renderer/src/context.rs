//! Render context: program and resource handles bundled into one owned
//! value, created once at startup and held for the renderer's lifetime.

/// Opaque GPU object id as reported by the backend.
pub type RawHandle = u32;

/// Attribute and uniform locations resolved after program link.
/// Negative means "not present in the linked program".
#[derive(Clone, Copy, Debug)]
pub struct ProgramLocations {
    pub position: i32,
    pub fill_color: i32,
    pub tex_coord: i32,
    pub projection: i32,
    pub model_view: i32,
    pub texture_mix: i32,
    pub texture: i32,
}

/// Everything the draw path needs per frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub program: RawHandle,
    pub locations: ProgramLocations,
    pub offscreen_target: RawHandle,
    pub offscreen_size: (u32, u32),
    /// The composited second texture source.
    pub texture: RawHandle,
}
