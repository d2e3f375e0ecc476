use glam::Vec2;

/// Size of the drawing surface in pixels, as fed to `u_resolution`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution(pub Vec2);

impl Resolution {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Vec2::new(width, height))
    }

    /// Same arithmetic as `Shaders/rect.vs`: pixels to 0..1, to 0..2, to -1..+1,
    /// then flip y since screen y grows downward.
    pub fn to_clip(&self, px: Vec2) -> Vec2 {
        let zero_to_one = px / self.0;
        let zero_to_two = zero_to_one * 2.0;
        let clip_space = zero_to_two - 1.0;
        clip_space * Vec2::new(1.0, -1.0)
    }
}
