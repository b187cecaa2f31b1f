mod app;
mod color;
mod data;
mod selection;
mod state;
mod ui;

use app::CarscopeApp;
use eframe::egui;

/// Published copy of the classic automotive dataset. Overridable with a
/// URL or local path as the first CLI argument.
const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/hemanthpranav/IV-MAIN/main/a1-cars.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Carscope – Automotive Dataset Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(CarscopeApp::with_source(&source)))),
    )
}
