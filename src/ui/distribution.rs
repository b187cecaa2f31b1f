use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Plot, Points};

use crate::data::model::{CarRecord, Origin};
use crate::data::stats::box_stats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Distribution view – weight box plots per origin
// ---------------------------------------------------------------------------

/// Render the weight distribution as one box-and-whisker per origin, with
/// whiskers at the IQR fences and outliers as separate markers. Clicking a
/// group's slot selects every car of that origin.
pub fn distribution_plot(ui: &mut Ui, state: &mut AppState, height: f32) {
    ui.strong("Weight distribution by origin");

    // Group visible weights by origin, first-occurrence order, noting
    // whether any member is part of the current selection.
    let mut groups: Vec<(Origin, Vec<f64>, bool)> = Vec::new();
    for r in state.visible_records() {
        let selected = state.selection.contains(&r.name);
        if let Some(i) = groups.iter().position(|(o, _, _)| *o == r.origin) {
            let (_, weights, any_selected) = &mut groups[i];
            weights.push(r.weight);
            *any_selected |= selected;
        } else {
            groups.push((r.origin, vec![r.weight], selected));
        }
    }

    let origins: Vec<Origin> = groups.iter().map(|(o, _, _)| *o).collect();
    let colors = state.colors.clone();

    let mut boxes: Vec<BoxElem> = Vec::new();
    let mut outliers: Vec<(Origin, Vec<[f64; 2]>)> = Vec::new();
    for (i, (origin, weights, any_selected)) in groups.iter().enumerate() {
        let Some(stats) = box_stats(weights) else {
            continue;
        };
        let color = colors.color_for(*origin);
        let stroke = if *any_selected {
            Stroke::new(2.0, Color32::WHITE)
        } else {
            Stroke::new(1.0, Color32::BLACK)
        };
        boxes.push(
            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    stats.low_fence,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.high_fence,
                ),
            )
            .name(origin.to_string())
            .fill(color.gamma_multiply(0.6))
            .stroke(stroke)
            .box_width(0.5)
            .whisker_width(0.3),
        );
        let pts: Vec<[f64; 2]> = stats.outliers.iter().map(|w| [i as f64, *w]).collect();
        if !pts.is_empty() {
            outliers.push((*origin, pts));
        }
    }

    let axis_names: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
    let response = Plot::new("weight_by_origin")
        .height(height)
        .y_axis_label("Weight (lbs)")
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
            plot_ui.box_plot(BoxPlot::new(boxes));
            for (origin, pts) in &outliers {
                plot_ui.points(
                    Points::new(pts.clone())
                        .color(colors.color_for(*origin))
                        .radius(2.5)
                        .filled(true),
                );
            }
            (plot_ui.pointer_coordinate(), plot_ui.response().clicked())
        });

    // Box / outlier click → origin group selection.
    if let (Some(pos), true) = response.inner {
        let slot = pos.x.round();
        if (pos.x - slot).abs() <= 0.4 && slot >= 0.0 && (slot as usize) < origins.len() {
            let origin = origins[slot as usize];
            state.select_by_group(|r: &CarRecord| r.origin, &origin);
        }
    }
}
