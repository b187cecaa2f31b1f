use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::model::CarRecord;
use crate::data::stats::{mean_by_group, sort_groups, GroupSort};
use crate::state::AppState;

const BAR_FILL: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Bar chart – average MPG per manufacturer
// ---------------------------------------------------------------------------

/// Render the categorical bar chart. Clicking a bar selects every car of
/// that manufacturer across all three views.
pub fn bar_chart(ui: &mut Ui, state: &mut AppState, height: f32) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Average MPG by manufacturer");
        ui.separator();
        if ui.small_button("Sort A–Z").clicked() {
            state.bar_sort = Some(GroupSort::Alphabetical);
        }
        if ui.small_button("Sort by MPG").clicked() {
            state.bar_sort = Some(GroupSort::MeanDescending);
        }
    });

    let mut means: Vec<(String, f64)> =
        mean_by_group(state.visible_records(), |r: &CarRecord| {
            r.manufacturer.clone()
        });
    if let Some(order) = state.bar_sort {
        sort_groups(&mut means, order);
    }

    let names: Vec<String> = means.iter().map(|(m, _)| m.clone()).collect();
    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, (m, mean))| Bar::new(i as f64, *mean).width(0.7).name(m.clone()))
        .collect();

    let axis_names = names.clone();
    let response = Plot::new("avg_mpg_bar")
        .height(height)
        .y_axis_label("Average MPG")
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() < 1e-6 && slot >= 0.0 && (slot as usize) < axis_names.len()
            {
                axis_names[slot as usize].clone()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_FILL));
            (plot_ui.pointer_coordinate(), plot_ui.response().clicked())
        });

    // Bar click → group selection. Hit-test against the bar's x slot and
    // its height.
    if let (Some(pos), true) = response.inner {
        let slot = pos.x.round();
        if (pos.x - slot).abs() <= 0.35 && slot >= 0.0 && (slot as usize) < means.len() {
            let (manufacturer, mean) = &means[slot as usize];
            if pos.y >= 0.0 && pos.y <= *mean {
                let manufacturer = manufacturer.clone();
                state.select_by_group(|r: &CarRecord| r.manufacturer.clone(), &manufacturer);
            }
        }
    }
}
