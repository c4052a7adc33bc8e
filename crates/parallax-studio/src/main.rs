//! Parallax studio: loads a scene description and runs it in a window.
//!
//! Usage: `parallax-studio [scene.json]`. Without an argument the bundled
//! default scene is shown.

mod app;
mod scene_file;
mod surface;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use parallax_engine::coords::Viewport;
use parallax_engine::device::GpuInit;
use parallax_engine::logging::{init_logging, LoggingConfig};
use parallax_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;
use crate::scene_file::SceneFile;

const DEFAULT_SCENE: &str = include_str!("../scenes/default.json");

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (source, text) = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read scene file {path}"))?;
            (path, text)
        }
        None => ("built-in default".to_string(), DEFAULT_SCENE.to_string()),
    };

    let file = SceneFile::parse(&text).with_context(|| format!("failed to load scene from {source}"))?;
    log::info!("loaded scene from {source}: {} cards", file.cards.len());

    let config = RuntimeConfig {
        title: "parallax studio".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };
    // The container is captured once; the scene is laid out against the initial window size.
    let container = Viewport::new(config.initial_size.width as f32, config.initial_size.height as f32);

    let app = StudioApp::new(file, container)?;
    Runtime::run(config, GpuInit::default(), app)
}
