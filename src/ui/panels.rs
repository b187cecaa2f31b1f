use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::Criterion;
use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: one dropdown per criterion, a reset action,
/// and a summary of the active selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the control domains so we can mutate state below.
    let manufacturers = dataset.manufacturers.clone();
    let origins = dataset.origins.clone();
    let cylinder_counts = dataset.cylinder_counts.clone();

    let mut criteria = state.criteria.clone();
    let mut changed = false;

    ui.strong("Manufacturer");
    let label = match &criteria.manufacturer {
        Criterion::All => "All manufacturers".to_string(),
        Criterion::Value(m) => m.clone(),
    };
    egui::ComboBox::from_id_salt("manufacturer_filter")
        .selected_text(label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(criteria.manufacturer.is_all(), "All manufacturers")
                .clicked()
            {
                criteria.manufacturer = Criterion::All;
                changed = true;
            }
            for m in &manufacturers {
                let selected = criteria.manufacturer == Criterion::Value(m.clone());
                if ui.selectable_label(selected, m).clicked() {
                    criteria.manufacturer = Criterion::Value(m.clone());
                    changed = true;
                }
            }
        });

    ui.add_space(6.0);
    ui.strong("Origin");
    let label = match &criteria.origin {
        Criterion::All => "All origins".to_string(),
        Criterion::Value(o) => o.to_string(),
    };
    egui::ComboBox::from_id_salt("origin_filter")
        .selected_text(label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(criteria.origin.is_all(), "All origins")
                .clicked()
            {
                criteria.origin = Criterion::All;
                changed = true;
            }
            for o in &origins {
                let selected = criteria.origin == Criterion::Value(*o);
                if ui.selectable_label(selected, o.as_str()).clicked() {
                    criteria.origin = Criterion::Value(*o);
                    changed = true;
                }
            }
        });

    ui.add_space(6.0);
    ui.strong("Cylinders");
    let label = match &criteria.cylinders {
        Criterion::All => "All cylinders".to_string(),
        Criterion::Value(n) => format!("{n} cylinders"),
    };
    egui::ComboBox::from_id_salt("cylinders_filter")
        .selected_text(label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(criteria.cylinders.is_all(), "All cylinders")
                .clicked()
            {
                criteria.cylinders = Criterion::All;
                changed = true;
            }
            for n in &cylinder_counts {
                let selected = criteria.cylinders == Criterion::Value(*n);
                if ui
                    .selectable_label(selected, format!("{n} cylinders"))
                    .clicked()
                {
                    criteria.cylinders = Criterion::Value(*n);
                    changed = true;
                }
            }
        });

    if changed {
        state.set_criteria(criteria);
    }

    ui.add_space(10.0);
    let resettable = state.criteria.is_active() || state.selection.restricts();
    if ui
        .add_enabled(resettable, egui::Button::new("Reset filters"))
        .clicked()
    {
        state.reset_filters();
    }

    ui.separator();
    ui.strong("Selection");
    if state.selection.restricts() {
        ui.label(format!("{} cars selected", state.selection.len()));
        if ui.button("Clear selection").clicked() {
            state.clear_selection();
        }
    } else {
        ui.label("Click a bar, point, or box, or drag on the scatter, to cross-filter all views.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                reload(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} cars loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Re-load from the current source. Failure leaves the previous dataset
/// and views untouched and surfaces the error in the top bar.
pub fn reload(state: &mut AppState) {
    if state.source.is_empty() {
        return;
    }
    let source = state.source.clone();
    match loader::load_source(&source) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} cars across {} manufacturers",
                dataset.len(),
                dataset.manufacturers.len()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open car dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.source = path.display().to_string();
        reload(state);
    }
}
