use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{bar, distribution, panels, scatter};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarscopeApp {
    pub state: AppState,
}

impl CarscopeApp {
    /// Build the app, performing the blocking initial load. A failed load
    /// leaves the dataset empty and surfaces the error where the charts
    /// would be; no automatic retry is attempted.
    pub fn with_source(source: &str) -> Self {
        let mut state = AppState::default();
        state.source = source.to_string();

        match loader::load_source(source) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} cars across {} manufacturers",
                    dataset.len(),
                    dataset.manufacturers.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Initial load failed: {e}");
                state.status_message = Some(format!("Error loading data: {e}"));
            }
        }

        Self { state }
    }
}

impl eframe::App for CarscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the three linked views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    match &self.state.status_message {
                        Some(msg) => ui.heading(msg.as_str()),
                        None => ui.heading("No dataset loaded  (File → Open…)"),
                    }
                });
                return;
            }

            let chart_height = (ui.available_height() / 2.0 - 28.0).max(120.0);
            bar::bar_chart(ui, &mut self.state, chart_height);
            ui.separator();
            ui.columns(2, |columns| {
                scatter::scatter_plot(&mut columns[0], &mut self.state, chart_height);
                distribution::distribution_plot(&mut columns[1], &mut self.state, chart_height);
            });
        });
    }
}
