#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod error;
mod io;
mod model;
mod store;
mod ui;
mod view;
mod workspace;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::io::Storage;
use crate::workspace::Workspace;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let storage = match Storage::default_slot() {
        Ok(storage) => storage,
        Err(e) => {
            // No platform data directory; fall back to the working directory.
            warn!(error = %e, "using ./planboard-projects.json");
            Storage::at("planboard-projects.json")
        }
    };
    info!(path = %storage.path().display(), "loading projects");
    let workspace = Workspace::load(storage);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Planboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Planboard",
        options,
        Box::new(|cc| Ok(Box::new(app::PlannerApp::new(cc, workspace)))),
    )
}
