/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  remote CSV / local file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse rows → CarDataset (invalid rows dropped)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ CarDataset  │  Vec<CarRecord>, distinct-value indices
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (criteria, selection) → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean-by-group, quantiles, IQR fences
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
