mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::PeaceAtlasApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    let data_path = config.data.clone();
    let mut state = AppState::new(config);
    // The dashboard has nothing to show without the registry.
    state
        .load(&data_path)
        .with_context(|| format!("loading {}", data_path.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Projects for Peace – Global Impact Index",
        options,
        Box::new(|_cc| Ok(Box::new(PeaceAtlasApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
