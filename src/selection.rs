use std::collections::BTreeSet;

use crate::data::model::CarRecord;

// ---------------------------------------------------------------------------
// Cross-filter selection
// ---------------------------------------------------------------------------

/// The shared cross-filter selection, keyed by car name.
///
/// `Inactive` places no constraint on the views. `Active` restricts every
/// view to the named cars, including `Active` with an empty set: a live
/// brush over a region containing nothing, which renders all views empty.
/// Gestures always replace the selection wholesale; two gestures never
/// union.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Inactive,
    Active(BTreeSet<String>),
}

impl Selection {
    /// Whether the selection constrains the derived view.
    pub fn restricts(&self) -> bool {
        matches!(self, Selection::Active(_))
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Selection::Inactive => false,
            Selection::Active(set) => set.contains(name),
        }
    }

    /// Number of selected cars (0 when inactive).
    pub fn len(&self) -> usize {
        match self {
            Selection::Inactive => 0,
            Selection::Active(set) => set.len(),
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::Inactive;
    }
}

// ---------------------------------------------------------------------------
// Selection-set builders
// ---------------------------------------------------------------------------

/// Names of all records whose key equals `key`. Bar and box clicks select
/// over the full dataset, so a group selection survives later criteria
/// changes.
pub fn group_members<K, F>(records: &[CarRecord], key_fn: F, key: &K) -> BTreeSet<String>
where
    K: PartialEq,
    F: Fn(&CarRecord) -> K,
{
    records
        .iter()
        .filter(|r| key_fn(r) == *key)
        .map(|r| r.name.clone())
        .collect()
}

/// Names of the records satisfying a geometric predicate. Brushes select
/// over the currently *filtered* view only.
pub fn region_members<'a, I, P>(records: I, predicate: P) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a CarRecord>,
    P: Fn(&CarRecord) -> bool,
{
    records
        .into_iter()
        .filter(|r| predicate(r))
        .map(|r| r.name.clone())
        .collect()
}
