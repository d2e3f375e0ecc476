use eframe::glow;
use rand::Rng;
use zerocopy::AsBytes;

use crate::config::SceneConfig;
use crate::gfx::shader::{ShaderUniformTypes, RECT_FRAGMENT_SRC, RECT_VERTEX_SRC};
use crate::gfx::{Device, GfxError, RectBindings, Resolution, Shader, ShaderHeader, Vertex};

use super::rect::{random_color, Rect};

/// Owns the program, its bindings and the single vertex buffer that every
/// rectangle is streamed through.
pub struct RectPainter<D: Device> {
    shader: Shader<D::Program>,
    bindings: RectBindings<D::UniformLocation>,
    vbo: D::Buffer,
    vao: Option<D::VertexArray>,
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                               Creation Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<D: Device> RectPainter<D> {
    pub fn new(device: &D, header: ShaderHeader) -> Result<Self, GfxError> {
        let shader = Shader::from_src(device, header, RECT_VERTEX_SRC, RECT_FRAGMENT_SRC)?;

        let bindings = match RectBindings::resolve(device, &shader) {
            Ok(bindings) => bindings,
            Err(e) => {
                shader.destroy(device);
                return Err(e.into());
            }
        };

        let vbo = match device.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                shader.destroy(device);
                return Err(GfxError::Resource(format!("vertex buffer: {e}")));
            }
        };

        Ok(Self {
            shader,
            bindings,
            vbo,
            vao: None,
        })
    }

    /// Desktop core profiles refuse attribute pointers without a bound vertex
    /// array, so the native viewer asks for one. WebGL 1 does without.
    pub fn with_vertex_array(mut self, device: &D) -> Result<Self, GfxError> {
        match device.create_vertex_array() {
            Ok(vao) => {
                self.vao = Some(vao);
                Ok(self)
            }
            Err(e) => {
                self.destroy(device);
                Err(GfxError::Resource(format!("vertex array: {e}")))
            }
        }
    }

    pub fn destroy(&mut self, device: &D) {
        if let Some(vao) = self.vao.take() {
            device.delete_vertex_array(vao);
        }
        device.delete_buffer(self.vbo);
        self.shader.destroy(device);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                                    Drawing                                                        //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl<D: Device> RectPainter<D> {
    /// Per-frame state: program, buffer, attribute layout and `u_resolution`.
    pub fn begin_frame(&self, device: &D, resolution: Resolution) {
        if self.vao.is_some() {
            device.bind_vertex_array(self.vao);
        }
        self.shader.use_program(device);

        device.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        device.enable_vertex_attrib_array(self.bindings.position);
        device.vertex_attrib_pointer_f32(
            self.bindings.position,
            Vertex::COMPONENTS,
            glow::FLOAT,
            false,
            0,
            0,
        );

        self.shader.set_uniform(
            device,
            &self.bindings.resolution,
            ShaderUniformTypes::Vec2(&resolution.0),
        );
    }

    /// Replaces the whole buffer with `rect` and draws it in `color`.
    /// Expects `begin_frame` to have run.
    pub fn draw_rect(&self, device: &D, rect: &Rect, color: glam::Vec4) {
        let verts = rect.vertices();
        device.buffer_data_u8_slice(glow::ARRAY_BUFFER, verts.as_bytes(), glow::STREAM_DRAW);

        self.shader
            .set_uniform(device, &self.bindings.color, ShaderUniformTypes::Vec4(&color));

        device.draw_arrays(glow::TRIANGLES, 0, verts.len() as i32);
    }

    /// Draws `config.rect_count` random rectangles back to front in
    /// submission order. Returns the number of draw calls issued.
    pub fn paint_scene<R: Rng>(
        &self,
        device: &D,
        resolution: Resolution,
        rng: &mut R,
        config: &SceneConfig,
    ) -> usize {
        self.begin_frame(device, resolution);

        for _ in 0..config.rect_count {
            let rect = Rect::random(rng, config.max_extent);
            let color = random_color(rng);
            log::trace!(
                "{rect:?} starts at {} in clip space",
                resolution.to_clip(rect.vertices()[0].into())
            );
            self.draw_rect(device, &rect, color);
        }

        if self.vao.is_some() {
            device.bind_vertex_array(None);
        }

        config.rect_count
    }

    /// A whole standalone frame: full-surface viewport, cleared to transparent
    /// black, then the scene.
    pub fn render_frame<R: Rng>(
        &self,
        device: &D,
        width: i32,
        height: i32,
        rng: &mut R,
        config: &SceneConfig,
    ) -> usize {
        device.viewport(0, 0, width, height);
        device.clear_color(0.0, 0.0, 0.0, 0.0);
        device.clear(glow::COLOR_BUFFER_BIT);

        self.paint_scene(device, Resolution::new(width as f32, height as f32), rng, config)
    }
}
