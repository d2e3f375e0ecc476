use glam::Vec4;
use rand::Rng;

use crate::gfx::Vertex;

/// A rectangle in pixel space. Only lives long enough to be uploaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Samples all four extents as whole pixels in `[0, max_extent)`.
    /// A `max_extent` of zero collapses everything to the origin.
    pub fn random<R: Rng>(rng: &mut R, max_extent: u32) -> Self {
        let mut sample = || rng.gen_range(0..max_extent.max(1)) as f32;
        Self::new(sample(), sample(), sample(), sample())
    }

    /// Two triangles covering the rectangle:
    /// (x1,y1) (x2,y1) (x1,y2) and (x1,y2) (x2,y1) (x2,y2).
    pub fn vertices(&self) -> [Vertex; 6] {
        let x1 = self.x;
        let x2 = self.x + self.width;
        let y1 = self.y;
        let y2 = self.y + self.height;
        [
            Vertex::new(x1, y1),
            Vertex::new(x2, y1),
            Vertex::new(x1, y2),
            Vertex::new(x1, y2),
            Vertex::new(x2, y1),
            Vertex::new(x2, y2),
        ]
    }
}

/// Opaque color with each channel in `[0, 1)`.
pub fn random_color<R: Rng>(rng: &mut R) -> Vec4 {
    Vec4::new(rng.gen(), rng.gen(), rng.gen(), 1.0)
}
