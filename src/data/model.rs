use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Origin – region of manufacture
// ---------------------------------------------------------------------------

/// Region a vehicle was built in. The source data only ever contains these
/// three values; rows with anything else are dropped at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    American,
    European,
    Japanese,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::American => "American",
            Origin::European => "European",
            Origin::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "American" => Ok(Origin::American),
            "European" => Ok(Origin::European),
            "Japanese" => Ok(Origin::Japanese),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// CarRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single vehicle. `name` is the selection key; the source does not
/// guarantee uniqueness, so selecting one "name" may light up duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub name: String,
    pub manufacturer: String,
    pub origin: Origin,
    /// Fuel economy in miles per gallon. Always present and > 0.
    pub mpg: f64,
    pub horsepower: f64,
    /// Curb weight in lbs.
    pub weight: f64,
    /// 0–60 time in seconds.
    pub acceleration: f64,
    /// Cylinder count; missing in a handful of source rows.
    pub cylinders: Option<u32>,
    pub displacement: Option<f64>,
}

// ---------------------------------------------------------------------------
// CarDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct-value indices.
/// Immutable after load; all downstream views index into `records`.
#[derive(Debug, Clone, Default)]
pub struct CarDataset {
    /// All retained records, in source order.
    pub records: Vec<CarRecord>,
    /// Distinct manufacturers, sorted ascending. Populates the filter control.
    pub manufacturers: Vec<String>,
    /// Distinct origins present in the data, in enum order.
    pub origins: Vec<Origin>,
    /// Distinct cylinder counts, sorted ascending.
    pub cylinder_counts: Vec<u32>,
}

impl CarDataset {
    /// Build the distinct-value indices from the retained records.
    pub fn from_records(records: Vec<CarRecord>) -> Self {
        let mut manufacturers: Vec<String> =
            records.iter().map(|r| r.manufacturer.clone()).collect();
        manufacturers.sort();
        manufacturers.dedup();

        let mut origins: Vec<Origin> = records.iter().map(|r| r.origin).collect();
        origins.sort();
        origins.dedup();

        let mut cylinder_counts: Vec<u32> =
            records.iter().filter_map(|r| r.cylinders).collect();
        cylinder_counts.sort_unstable();
        cylinder_counts.dedup();

        CarDataset {
            records,
            manufacturers,
            origins,
            cylinder_counts,
        }
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
