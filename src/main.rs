mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::FlixboardApp;
use data::loader::{CatalogCache, DATA_PATH};
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dashboard cannot render without data: the initial load is fatal.
    let mut cache = CatalogCache::new(DATA_PATH);
    let table = cache
        .load()
        .with_context(|| format!("loading catalog from {DATA_PATH}"))?;
    log::info!("loaded {} catalog rows from {DATA_PATH}", table.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flixboard – Catalog Analytics",
        options,
        Box::new(move |_cc| Ok(Box::new(FlixboardApp::new(AppState::new(cache, table))))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
