#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(unsafe_code)]
#![allow(clippy::undocumented_unsafe_blocks)]

mod config;
mod gfx;
mod scene;

#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(target_arch = "wasm32")]
mod web;

use config::SceneConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use config::{HEIGHT, WIDTH};
    use eframe::egui;

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WIDTH, HEIGHT]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    let result = eframe::run_native(
        "WebGL Rectangles",
        options,
        Box::new(|cc| {
            let app = app::RectsApp::new(cc, SceneConfig::default())?;
            Ok(Box::new(app))
        }),
    );

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    if let Err(e) = web::run(&SceneConfig::default()) {
        log::error!("Nothing drawn: {e}");
    }
}
