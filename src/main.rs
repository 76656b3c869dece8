// src/main.rs
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

mod app;
mod data;
mod export;
mod reshape;
mod state;
mod ui;

use app::StockDashApp;
use data::Dataset;

// The dataset is pre-built; the app only ever reads it from this path.
const DATASET_PATH: &str = "datasets/df_combined_07_28_2022.csv";

fn main() -> Result<()> {
    // A missing or malformed dataset aborts startup. No partial load, no
    // retry: by the time a window opens the dataset is known good.
    let dataset = Dataset::load(Path::new(DATASET_PATH))
        .with_context(|| format!("Failed to load dataset from {}", DATASET_PATH))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Stock Analysis Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Analysis Dashboard",
        options,
        Box::new(move |_cc| Box::new(StockDashApp::new(dataset))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
