use std::sync::Arc;

use eframe::{egui, egui_glow, glow};
use egui::mutex::Mutex;
use egui::Color32;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SceneConfig;
use crate::gfx::{GfxError, Resolution, ShaderHeader};
use crate::scene::RectPainter;

/// Desktop host for the scene: one canvas panel, repainted on demand with the
/// same seed so the picture never changes.
pub struct RectsApp {
    /// Shared with the paint callback, which runs after `update` returns.
    painter: Arc<Mutex<RectPainter<glow::Context>>>,
    config: SceneConfig,
    seed: u64,
    bg_color: Color32,
}

impl RectsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SceneConfig) -> Result<Self, GfxError> {
        let gl = cc
            .gl
            .as_ref()
            .ok_or_else(|| GfxError::Resource("a glow context (use the glow renderer)".into()))?;

        let version = egui_glow::ShaderVersion::get(gl);
        let header = ShaderHeader {
            version: version.version_declaration(),
            new_interface: version.is_new_shader_interface(),
        };
        log::debug!("Building shaders for {version:?}");

        let painter = RectPainter::new(&**gl, header)?.with_vertex_array(&**gl)?;

        let seed = config.resolve_seed();
        log::info!("Painting scene with seed {seed}");

        Ok(Self {
            painter: Arc::new(Mutex::new(painter)),
            config,
            seed,
            bg_color: Color32::BLACK,
        })
    }

    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());

        // Clone to Give to callback
        let painter = self.painter.clone();
        let config = self.config.clone();
        let seed = self.seed;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, egui_painter| {
                let viewport = info.viewport_in_pixels();
                let resolution = Resolution::new(viewport.width_px as f32, viewport.height_px as f32);
                let gl: &glow::Context = egui_painter.gl();

                let mut rng = StdRng::seed_from_u64(seed);
                painter.lock().paint_scene(gl, resolution, &mut rng, &config);
            })),
        };
        ui.painter().add(callback);
    }
}

impl eframe::App for RectsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style())
                .fill(self.bg_color)
                .show(ui, |ui| {
                    self.custom_painting(ui);
                });
        });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.painter.lock().destroy(gl);
        }
    }
}
