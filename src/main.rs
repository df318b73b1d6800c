mod app;
mod color;
mod data;
mod reactive;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::LaunchDashApp;
use eframe::egui;
use state::{AppState, DashContext};

/// Dataset used when no path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once, before the window opens.
    // Any load failure is fatal.
    let dataset = data::loader::load_csv(&path)
        .with_context(|| format!("loading launch data from {}", path.display()))?;
    log::info!(
        "Loaded {} launches from {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let state = AppState::new(DashContext::new(dataset));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
