use zerocopy::AsBytes;

/// One pixel-space position, laid out exactly as `a_position` reads it.
#[derive(Debug, Clone, Copy, PartialEq, AsBytes)]
#[repr(C)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const COMPONENTS: i32 = 2;

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vertex> for glam::Vec2 {
    fn from(vtx: Vertex) -> Self {
        glam::Vec2::new(vtx.x, vtx.y)
    }
}
