use std::collections::BTreeSet;

use crate::color::OriginColors;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::{CarDataset, CarRecord};
use crate::data::stats::GroupSort;
use crate::selection::{self, Selection};

// ---------------------------------------------------------------------------
// Brush geometry
// ---------------------------------------------------------------------------

/// Rectangular brush in scatter-plot data coordinates (horsepower on x,
/// MPG on y). Kept from drag start so the region can grow in any
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushRect {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl BrushRect {
    pub fn x_range(&self) -> (f64, f64) {
        (self.start[0].min(self.end[0]), self.start[0].max(self.end[0]))
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.start[1].min(self.end[1]), self.start[1].max(self.end[1]))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        x >= x0 && x <= x1 && y >= y0 && y <= y1
    }

    /// A brush that never left its starting point selects nothing and is
    /// treated as a cancelled gesture.
    pub fn is_degenerate(&self) -> bool {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        x0 == x1 || y0 == y1
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. All mutations go through
/// the methods below; each one synchronously recomputes the derived view,
/// so every frame draws all three charts from consistent state.
pub struct AppState {
    /// Loaded dataset (None until the initial load succeeds).
    pub dataset: Option<CarDataset>,

    /// Dropdown filter criteria.
    pub criteria: FilterCriteria,

    /// Cross-filter selection shared by all three views.
    pub selection: Selection,

    /// Indices of records passing criteria + selection, recomputed from
    /// scratch on every mutation.
    pub visible_indices: Vec<usize>,

    /// Bar chart ordering; None keeps first-occurrence group order.
    pub bar_sort: Option<GroupSort>,

    /// Live or last-completed scatter brush, if any.
    pub brush: Option<BrushRect>,

    /// Origin → colour mapping used by the scatter and distribution views.
    pub colors: OriginColors,

    /// Where the dataset was loaded from (URL or path), for reloads.
    pub source: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            selection: Selection::Inactive,
            visible_indices: Vec::new(),
            bar_sort: None,
            brush: None,
            colors: OriginColors::default(),
            source: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset all view state.
    pub fn set_dataset(&mut self, dataset: CarDataset) {
        self.criteria = FilterCriteria::default();
        self.selection = Selection::Inactive;
        self.brush = None;
        self.visible_indices = (0..dataset.len()).collect();
        self.colors = OriginColors::new(&dataset.origins);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after any criteria/selection change.
    pub fn refresh(&mut self) {
        match &self.dataset {
            Some(ds) => {
                self.visible_indices = filtered_indices(ds, &self.criteria, &self.selection);
            }
            None => self.visible_indices.clear(),
        }
    }

    /// Records currently passing criteria + selection, in dataset order.
    pub fn visible_records(&self) -> impl Iterator<Item = &CarRecord> {
        let records = self.dataset.as_ref().map(|ds| ds.records.as_slice());
        self.visible_indices
            .iter()
            .filter_map(move |&i| records.map(|r| &r[i]))
    }

    // -- Filter control entry points --

    /// Replace the dropdown criteria wholesale and re-derive.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Reset action: all three criteria back to All, selection cleared.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.selection.clear();
        self.brush = None;
        self.refresh();
    }

    // -- Selection coordinator entry points (one per gesture kind) --
    //
    // Each replaces the selection wholesale (no union with prior state)
    // and re-derives, so the gesture is observable in all three views.

    /// Bar / box / outlier click: select every car in the clicked group,
    /// scanning the full dataset.
    pub fn select_by_group<K, F>(&mut self, key_fn: F, key: &K)
    where
        K: PartialEq,
        F: Fn(&CarRecord) -> K,
    {
        if let Some(ds) = &self.dataset {
            self.selection = Selection::Active(selection::group_members(&ds.records, key_fn, key));
            self.brush = None;
            self.refresh();
        }
    }

    /// Point click: select exactly this car.
    pub fn select_single(&mut self, name: &str) {
        self.selection = Selection::Active(BTreeSet::from([name.to_string()]));
        self.brush = None;
        self.refresh();
    }

    /// Live brush: select the cars inside the region, evaluated against
    /// the criteria-filtered view. The prior selection does not narrow
    /// the candidates; each intermediate state replaces the last.
    pub fn select_by_region<P>(&mut self, predicate: P)
    where
        P: Fn(&CarRecord) -> bool,
    {
        if let Some(ds) = &self.dataset {
            let base = filtered_indices(ds, &self.criteria, &Selection::Inactive);
            let members =
                selection::region_members(base.iter().map(|&i| &ds.records[i]), predicate);
            self.selection = Selection::Active(members);
            self.refresh();
        }
    }

    /// Reset, a cancelled brush, or a click on empty space.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.brush = None;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Criterion;
    use crate::data::model::Origin;

    fn record(name: &str, manufacturer: &str, origin: Origin, hp: f64, mpg: f64) -> CarRecord {
        CarRecord {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            origin,
            mpg,
            horsepower: hp,
            weight: 2800.0,
            acceleration: 14.0,
            cylinders: Some(4),
            displacement: None,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(CarDataset::from_records(vec![
            record("corolla", "Toyota", Origin::Japanese, 75.0, 31.0),
            record("civic", "Honda", Origin::Japanese, 67.0, 33.0),
            record("mustang", "Ford", Origin::American, 140.0, 16.0),
            record("pinto", "Ford", Origin::American, 85.0, 23.0),
        ]));
        state
    }

    #[test]
    fn fresh_dataset_shows_everything() {
        let state = loaded_state();
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
        assert_eq!(state.selection, Selection::Inactive);
    }

    #[test]
    fn reset_after_gestures_matches_fresh_load() {
        let mut state = loaded_state();
        state.set_criteria(FilterCriteria {
            origin: Criterion::Value(Origin::American),
            ..Default::default()
        });
        state.select_by_group(|r: &CarRecord| r.manufacturer.clone(), &"Ford".to_string());
        state.select_single("pinto");
        state.reset_filters();

        let fresh = loaded_state();
        assert_eq!(state.visible_indices, fresh.visible_indices);
        assert_eq!(state.criteria, fresh.criteria);
        assert_eq!(state.selection, fresh.selection);
    }

    #[test]
    fn gestures_replace_rather_than_union() {
        let mut state = loaded_state();
        state.select_by_group(|r: &CarRecord| r.manufacturer.clone(), &"Ford".to_string());
        assert_eq!(state.selection.len(), 2);

        state.select_single("corolla");
        assert_eq!(state.selection.len(), 1);
        assert!(state.selection.contains("corolla"));
        assert!(!state.selection.contains("mustang"));
    }

    #[test]
    fn group_click_restricts_every_view_to_the_group() {
        let mut state = loaded_state();
        state.select_by_group(|r: &CarRecord| r.origin, &Origin::American);
        assert_eq!(state.visible_indices, vec![2, 3]);
    }

    #[test]
    fn region_selection_is_evaluated_against_the_criteria_filtered_view() {
        let mut state = loaded_state();
        // A prior narrow selection must not ratchet down the brush
        // candidates: brushing re-selects from the criteria-filtered view.
        state.select_single("corolla");
        state.select_by_region(|r| r.horsepower < 100.0);
        assert_eq!(state.selection.len(), 3);

        // Criteria still bound the brush.
        state.set_criteria(FilterCriteria {
            origin: Criterion::Value(Origin::Japanese),
            ..Default::default()
        });
        state.select_by_region(|r| r.horsepower < 100.0);
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn empty_region_keeps_selection_active_and_renders_nothing() {
        let mut state = loaded_state();
        state.select_by_region(|r| r.horsepower > 1000.0);
        assert!(state.selection.restricts());
        assert!(state.visible_indices.is_empty());

        state.clear_selection();
        assert_eq!(state.visible_indices.len(), 4);
    }

    #[test]
    fn degenerate_brush_rect_is_detected() {
        let rect = BrushRect {
            start: [100.0, 20.0],
            end: [100.0, 35.0],
        };
        assert!(rect.is_degenerate());

        let rect = BrushRect {
            start: [100.0, 20.0],
            end: [150.0, 35.0],
        };
        assert!(!rect.is_degenerate());
        assert!(rect.contains(120.0, 25.0));
        assert!(!rect.contains(160.0, 25.0));
    }
}
