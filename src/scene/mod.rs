pub mod painter;
pub mod rect;

pub use painter::RectPainter;
