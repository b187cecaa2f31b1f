use crate::selection::Selection;

use super::model::{CarDataset, Origin};

// ---------------------------------------------------------------------------
// Filter criteria: one typed criterion per control
// ---------------------------------------------------------------------------

/// A single dropdown's constraint. `All` is the no-constraint sentinel;
/// `Value` matches by equality. Replaces the source's `"all"` magic string
/// so the cylinder filter compares numbers to numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion<T> {
    All,
    Value(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::All
    }
}

impl<T: PartialEq> Criterion<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Value(v) => v == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Criterion::All)
    }
}

/// The three dropdown constraints, ANDed together. Each field is set only
/// by its own control; `Default` (and reset) is all-`All`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub manufacturer: Criterion<String>,
    pub origin: Criterion<Origin>,
    pub cylinders: Criterion<u32>,
}

impl FilterCriteria {
    /// Whether any dropdown constrains the view.
    pub fn is_active(&self) -> bool {
        !(self.manufacturer.is_all() && self.origin.is_all() && self.cylinders.is_all())
    }
}

// ---------------------------------------------------------------------------
// Derivation: (dataset, criteria, selection) → visible indices
// ---------------------------------------------------------------------------

/// Return indices of records passing the criteria and, when a selection is
/// active, the selection. Applied in fixed order: manufacturer, origin,
/// cylinders, then selection membership. Recomputed from scratch on every
/// state change; order of the result follows dataset order.
///
/// A record with no cylinder count never matches a `Value` cylinder
/// criterion.
pub fn filtered_indices(
    dataset: &CarDataset,
    criteria: &FilterCriteria,
    selection: &Selection,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            if !criteria.manufacturer.accepts(&r.manufacturer) {
                return false;
            }
            if !criteria.origin.accepts(&r.origin) {
                return false;
            }
            match &criteria.cylinders {
                Criterion::All => {}
                Criterion::Value(n) => {
                    if r.cylinders != Some(*n) {
                        return false;
                    }
                }
            }
            if selection.restricts() && !selection.contains(&r.name) {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::CarRecord;

    fn record(name: &str, manufacturer: &str, origin: Origin, cyl: Option<u32>) -> CarRecord {
        CarRecord {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            origin,
            mpg: 25.0,
            horsepower: 90.0,
            weight: 2500.0,
            acceleration: 14.0,
            cylinders: cyl,
            displacement: Some(120.0),
        }
    }

    fn dataset() -> CarDataset {
        CarDataset::from_records(vec![
            record("corolla", "Toyota", Origin::Japanese, Some(4)),
            record("mustang", "Ford", Origin::American, Some(8)),
            record("pinto", "Ford", Origin::American, Some(4)),
            record("golf", "Volkswagen", Origin::European, None),
        ])
    }

    #[test]
    fn identity_criteria_pass_everything_in_order() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &FilterCriteria::default(), &Selection::Inactive);
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn criteria_and_together() {
        let ds = dataset();
        let criteria = FilterCriteria {
            manufacturer: Criterion::Value("Ford".to_string()),
            origin: Criterion::Value(Origin::American),
            cylinders: Criterion::Value(4),
        };
        let idx = filtered_indices(&ds, &criteria, &Selection::Inactive);
        assert_eq!(idx, vec![2]);
    }

    #[test]
    fn missing_cylinders_never_match_a_value_criterion() {
        let ds = dataset();
        let criteria = FilterCriteria {
            cylinders: Criterion::Value(4),
            ..Default::default()
        };
        let idx = filtered_indices(&ds, &criteria, &Selection::Inactive);
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn selection_restricts_but_never_adds() {
        let ds = dataset();
        let criteria = FilterCriteria {
            manufacturer: Criterion::Value("Ford".to_string()),
            ..Default::default()
        };
        // "corolla" is selected but excluded by the criteria; it must not
        // resurface.
        let selection = Selection::Active(BTreeSet::from([
            "corolla".to_string(),
            "pinto".to_string(),
        ]));
        let with_sel = filtered_indices(&ds, &criteria, &selection);
        let without_sel = filtered_indices(&ds, &criteria, &Selection::Inactive);
        assert_eq!(with_sel, vec![2]);
        assert!(with_sel.iter().all(|i| without_sel.contains(i)));
    }

    #[test]
    fn active_empty_selection_hides_everything() {
        let ds = dataset();
        let idx = filtered_indices(
            &ds,
            &FilterCriteria::default(),
            &Selection::Active(BTreeSet::new()),
        );
        assert!(idx.is_empty());
    }

    #[test]
    fn inactive_selection_is_no_constraint() {
        let ds = dataset();
        assert_eq!(
            filtered_indices(&ds, &FilterCriteria::default(), &Selection::Inactive).len(),
            ds.len()
        );
    }
}
