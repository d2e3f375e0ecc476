//! Browser entry: draw one frame into the `mycanvas` element.

use std::error::Error;
use std::fmt;

use eframe::glow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::config::{SceneConfig, CANVAS_ID};
use crate::gfx::ShaderHeader;
use crate::scene::RectPainter;

#[derive(Debug, Clone, PartialEq)]
pub enum ContextError {
    NoWindow,
    NoDocument,
    MissingCanvas(&'static str),
    NotACanvas(&'static str),
    ContextUnavailable,
    Js(String),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global `window`"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingCanvas(id) => write!(f, "no element with id `{id}`"),
            Self::NotACanvas(id) => write!(f, "element `{id}` is not a canvas"),
            Self::ContextUnavailable => write!(f, "WebGL is not supported by this browser"),
            Self::Js(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for ContextError {}

impl From<JsValue> for ContextError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A WebGL 1 context together with the canvas size it was created at.
pub struct Surface {
    pub gl: glow::Context,
    pub width: i32,
    pub height: i32,
}

impl Surface {
    /// Finds the canvas, writes its client size back as its drawing buffer
    /// size and opens a context without an alpha channel.
    pub fn acquire(canvas_id: &'static str) -> Result<Self, ContextError> {
        let window = web_sys::window().ok_or(ContextError::NoWindow)?;
        let document = window.document().ok_or(ContextError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or(ContextError::MissingCanvas(canvas_id))?
            .dyn_into()
            .map_err(|_| ContextError::NotACanvas(canvas_id))?;

        let width = canvas.client_width();
        let height = canvas.client_height();
        canvas.set_attribute("width", &width.to_string())?;
        canvas.set_attribute("height", &height.to_string())?;
        log::info!("Canvas `{canvas_id}` is {width}x{height}");

        let context_options = js_sys::Object::new();
        js_sys::Reflect::set(&context_options, &"alpha".into(), &false.into())?;

        let webgl: WebGlRenderingContext = canvas
            .get_context_with_context_options("webgl", &context_options)?
            .ok_or(ContextError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| ContextError::ContextUnavailable)?;

        Ok(Self {
            gl: glow::Context::from_webgl1_context(webgl),
            width,
            height,
        })
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Acquires the canvas and paints the scene once. Any failure is alerted and
/// nothing is drawn.
pub fn run(config: &SceneConfig) -> Result<(), Box<dyn Error>> {
    let surface = match Surface::acquire(CANVAS_ID) {
        Ok(surface) => surface,
        Err(e) => {
            alert(&format!("Error: {e}"));
            return Err(e.into());
        }
    };
    let gl = &surface.gl;

    let mut painter = RectPainter::new(gl, ShaderHeader::WEBGL1)?;

    let seed = config.resolve_seed();
    log::info!("Painting scene with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let draws = painter.render_frame(gl, surface.width, surface.height, &mut rng, config);
    log::debug!("Issued {draws} draw calls");

    painter.destroy(gl);
    Ok(())
}
