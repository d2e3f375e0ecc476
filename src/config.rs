/// Id of the canvas element the browser build draws into.
#[cfg(target_arch = "wasm32")]
pub const CANVAS_ID: &str = "mycanvas";

/// Inner size of the native viewer window.
#[cfg(not(target_arch = "wasm32"))]
pub const WIDTH: f32 = 640f32;
#[cfg(not(target_arch = "wasm32"))]
pub const HEIGHT: f32 = 480f32;

pub const RECT_COUNT: usize = 50;
pub const MAX_EXTENT: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    /// Rectangles (and therefore draw calls) per frame.
    pub rect_count: usize,
    /// Exclusive upper bound for x, y, width and height.
    pub max_extent: u32,
    /// Fixed seed for a reproducible scene; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rect_count: RECT_COUNT,
            max_extent: MAX_EXTENT,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// The seed this scene will use, picking a random one if none was fixed.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
