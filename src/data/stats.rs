use super::model::CarRecord;

// ---------------------------------------------------------------------------
// Mean fuel economy by group
// ---------------------------------------------------------------------------

/// Group records by `key_fn` and compute the arithmetic mean MPG per group.
/// Groups come back in first-occurrence order; callers re-sort with
/// [`sort_groups`] when they want one of the supported display orders.
/// Empty input yields an empty result.
pub fn mean_by_group<'a, K, F, I>(records: I, key_fn: F) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = &'a CarRecord>,
    K: PartialEq,
    F: Fn(&CarRecord) -> K,
{
    let mut groups: Vec<(K, f64, usize)> = Vec::new();
    for r in records {
        let key = key_fn(r);
        if let Some(i) = groups.iter().position(|(k, _, _)| *k == key) {
            let (_, sum, n) = &mut groups[i];
            *sum += r.mpg;
            *n += 1;
        } else {
            groups.push((key, r.mpg, 1));
        }
    }
    groups
        .into_iter()
        .map(|(k, sum, n)| (k, sum / n as f64))
        .collect()
}

/// Display orders for grouped means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSort {
    /// Ascending by group key.
    Alphabetical,
    /// Descending by mean value.
    MeanDescending,
}

pub fn sort_groups<K: Ord>(groups: &mut [(K, f64)], order: GroupSort) {
    match order {
        GroupSort::Alphabetical => groups.sort_by(|a, b| a.0.cmp(&b.0)),
        GroupSort::MeanDescending => groups.sort_by(|a, b| b.1.total_cmp(&a.1)),
    }
}

// ---------------------------------------------------------------------------
// Quantiles and IQR fences
// ---------------------------------------------------------------------------

/// Continuous (R-7) quantile over an ascending-sorted slice: index
/// `q·(n−1)`, linearly interpolated between neighbours. `None` on empty
/// input; `q` is clamped to [0, 1].
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let h = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64))
}

/// Box-and-whisker summary of one group.
///
/// The fences are clamped to the observed data range (whisker ends), but
/// outlier-ness is judged against the unclamped `Q1 − 1.5·IQR` /
/// `Q3 + 1.5·IQR` interval: a value is an outlier iff it lies strictly
/// outside that interval. With IQR = 0 the two coincide and every value
/// away from the quartiles is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lower whisker end: `max(min(values), Q1 − 1.5·IQR)`.
    pub low_fence: f64,
    /// Upper whisker end: `min(max(values), Q3 + 1.5·IQR)`.
    pub high_fence: f64,
    /// Values strictly outside the unclamped fence interval, ascending.
    pub outliers: Vec<f64>,
}

pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;

    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lower || *v > upper)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        low_fence: sorted[0].max(lower),
        high_fence: sorted[sorted.len() - 1].min(upper),
        outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Origin;

    fn car(manufacturer: &str, mpg: f64) -> CarRecord {
        CarRecord {
            name: format!("{manufacturer} {mpg}"),
            manufacturer: manufacturer.to_string(),
            origin: Origin::American,
            mpg,
            horsepower: 100.0,
            weight: 3000.0,
            acceleration: 15.0,
            cylinders: Some(4),
            displacement: None,
        }
    }

    #[test]
    fn mean_of_singleton_group_is_exact() {
        let cars = vec![car("Saab", 21.6)];
        let means = mean_by_group(&cars, |r| r.manufacturer.clone());
        assert_eq!(means, vec![("Saab".to_string(), 21.6)]);
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let cars = vec![car("B", 10.0), car("A", 20.0), car("B", 30.0)];
        let means = mean_by_group(&cars, |r| r.manufacturer.clone());
        assert_eq!(
            means,
            vec![("B".to_string(), 20.0), ("A".to_string(), 20.0)]
        );
    }

    #[test]
    fn descending_sort_orders_by_mean() {
        // Groups with means 20, 30, 10 → descending gives 30, 20, 10.
        let cars = vec![
            car("X", 20.0),
            car("X", 20.0),
            car("Y", 30.0),
            car("Z", 10.0),
            car("Z", 10.0),
            car("Z", 10.0),
        ];
        let mut means = mean_by_group(&cars, |r| r.manufacturer.clone());
        sort_groups(&mut means, GroupSort::MeanDescending);
        let values: Vec<f64> = means.iter().map(|(_, m)| *m).collect();
        assert_eq!(values, vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn alphabetical_sort_orders_by_key() {
        let cars = vec![car("Volvo", 20.0), car("Audi", 18.0), car("Mazda", 25.0)];
        let mut means = mean_by_group(&cars, |r| r.manufacturer.clone());
        sort_groups(&mut means, GroupSort::Alphabetical);
        let keys: Vec<&str> = means.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Audi", "Mazda", "Volvo"]);
    }

    #[test]
    fn mean_over_empty_input_is_empty() {
        let cars: Vec<CarRecord> = Vec::new();
        assert!(mean_by_group(&cars, |r| r.manufacturer.clone()).is_empty());
    }

    #[test]
    fn median_interpolates_between_neighbours() {
        assert_eq!(quantile(&[10.0, 20.0, 30.0], 0.5), Some(20.0));
        assert_eq!(quantile(&[10.0, 20.0, 30.0, 40.0], 0.5), Some(25.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn quantile_endpoints() {
        let values = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 1.0), Some(8.0));
        // Out-of-range q clamps rather than indexing out of bounds.
        assert_eq!(quantile(&values, 1.5), Some(8.0));
    }

    #[test]
    fn zero_iqr_marks_every_off_quartile_value_as_outlier() {
        let stats = box_stats(&[100.0, 100.0, 100.0, 100.0, 500.0]).unwrap();
        assert_eq!(stats.q1, 100.0);
        assert_eq!(stats.q3, 100.0);
        assert_eq!(stats.low_fence, 100.0);
        assert_eq!(stats.high_fence, 100.0);
        assert_eq!(stats.outliers, vec![500.0]);
    }

    #[test]
    fn fences_clamp_to_data_range() {
        let stats = box_stats(&[10.0, 12.0, 14.0, 16.0, 18.0]).unwrap();
        // Unclamped fences lie outside the data, so the whiskers stop at
        // the observed extremes and nothing is an outlier.
        assert_eq!(stats.low_fence, 10.0);
        assert_eq!(stats.high_fence, 18.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn box_stats_on_empty_input_is_none() {
        assert!(box_stats(&[]).is_none());
    }
}
