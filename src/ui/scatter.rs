use std::collections::BTreeMap;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, Points, Polygon};

use crate::data::model::Origin;
use crate::state::{AppState, BrushRect};

/// Pixel radius for point picking.
const PICK_RADIUS: f32 = 8.0;

const BRUSH_FILL: Color32 = Color32::from_rgba_premultiplied(60, 60, 110, 40);

/// Gesture recognized this frame, applied after the plot closes so the
/// view only ever talks to the coordinator entry points.
enum Gesture {
    None,
    BrushStart([f64; 2]),
    BrushMove([f64; 2]),
    BrushEnd,
    Pick(String),
    ClearPick,
}

// ---------------------------------------------------------------------------
// Scatter plot – horsepower vs MPG, colored by origin
// ---------------------------------------------------------------------------

/// Render the scatter view. Clicking a point selects that car; clicking
/// empty space clears; dragging brushes a rectangle that continuously
/// re-selects the cars inside it.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState, height: f32) {
    ui.strong("Horsepower vs MPG");

    let mut series: BTreeMap<Origin, Vec<[f64; 2]>> = BTreeMap::new();
    let mut highlighted: Vec<[f64; 2]> = Vec::new();
    // (name, horsepower, mpg) for pixel-space picking.
    let mut visible: Vec<(String, f64, f64)> = Vec::new();
    for r in state.visible_records() {
        series.entry(r.origin).or_default().push([r.horsepower, r.mpg]);
        if state.selection.contains(&r.name) {
            highlighted.push([r.horsepower, r.mpg]);
        }
        visible.push((r.name.clone(), r.horsepower, r.mpg));
    }

    let colors = state.colors.clone();
    let brush = state.brush;

    let response = Plot::new("hp_vs_mpg")
        .height(height)
        .x_axis_label("Horsepower")
        .y_axis_label("MPG")
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (origin, pts) in &series {
                plot_ui.points(
                    Points::new(pts.clone())
                        .name(origin.to_string())
                        .color(colors.color_for(*origin))
                        .radius(3.0)
                        .filled(true),
                );
            }

            // Selected cars get a hollow ring on top of their dot.
            if !highlighted.is_empty() {
                plot_ui.points(
                    Points::new(highlighted.clone())
                        .color(Color32::WHITE)
                        .radius(5.0)
                        .filled(false),
                );
            }

            if let Some(rect) = brush {
                let (x0, x1) = rect.x_range();
                let (y0, y1) = rect.y_range();
                plot_ui.polygon(
                    Polygon::new(vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]])
                        .fill_color(BRUSH_FILL)
                        .stroke(Stroke::new(1.0, Color32::LIGHT_BLUE)),
                );
            }

            let resp = plot_ui.response();
            if resp.drag_started() {
                match plot_ui.pointer_coordinate() {
                    Some(p) => Gesture::BrushStart([p.x, p.y]),
                    None => Gesture::None,
                }
            } else if resp.dragged() {
                match plot_ui.pointer_coordinate() {
                    Some(p) => Gesture::BrushMove([p.x, p.y]),
                    None => Gesture::None,
                }
            } else if resp.drag_stopped() {
                Gesture::BrushEnd
            } else if resp.clicked() {
                match resp.interact_pointer_pos() {
                    Some(click_pos) => {
                        let mut best: Option<(f32, &str)> = None;
                        for (name, hp, mpg) in &visible {
                            let screen = plot_ui.screen_from_plot(PlotPoint::new(*hp, *mpg));
                            let d2 = screen.distance_sq(click_pos);
                            if best.is_none_or(|(b, _)| d2 < b) {
                                best = Some((d2, name.as_str()));
                            }
                        }
                        match best {
                            Some((d2, name)) if d2 <= PICK_RADIUS * PICK_RADIUS => {
                                Gesture::Pick(name.to_string())
                            }
                            _ => Gesture::ClearPick,
                        }
                    }
                    None => Gesture::None,
                }
            } else {
                Gesture::None
            }
        });

    match response.inner {
        Gesture::BrushStart(p) => {
            state.brush = Some(BrushRect { start: p, end: p });
        }
        Gesture::BrushMove(p) => {
            if let Some(rect) = &mut state.brush {
                rect.end = p;
            }
            // Re-select continuously while the drag is live.
            if let Some(rect) = state.brush {
                state.select_by_region(move |r| rect.contains(r.horsepower, r.mpg));
            }
        }
        Gesture::BrushEnd => {
            // A drag that never opened an area is a cancelled brush.
            if state.brush.is_some_and(|r| r.is_degenerate()) {
                state.clear_selection();
            }
        }
        Gesture::Pick(name) => state.select_single(&name),
        Gesture::ClearPick => state.clear_selection(),
        Gesture::None => {}
    }
}
