use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{CarDataset, CarRecord, Origin};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to obtain or parse the source table. Per-field numeric parse
/// failures are *not* errors; they mark the field missing and the row is
/// dropped only if a required field ends up missing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching dataset: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("reading dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing dataset: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a source string: a `http(s)://` URL is fetched
/// over the network, anything else is treated as a local file path.
pub fn load_source(source: &str) -> Result<CarDataset, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        load_remote(source)
    } else {
        load_file(Path::new(source))
    }
}

/// Fetch the CSV over HTTP. Blocks until the transfer completes or fails;
/// nothing is rendered before the initial load resolves, so there is no
/// UI to starve.
pub fn load_remote(url: &str) -> Result<CarDataset, LoadError> {
    log::info!("Fetching dataset from {url}");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    parse_records(body.as_bytes())
}

/// Read the CSV from a local file (offline use, sample data).
pub fn load_file(path: &Path) -> Result<CarDataset, LoadError> {
    log::info!("Loading dataset from {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_records(file)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Raw row as it appears in the source table. Numeric columns are kept as
/// text here so a malformed cell degrades to a missing *field* instead of
/// failing the row outright.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Car")]
    car: String,
    #[serde(rename = "Manufacturer")]
    manufacturer: String,
    #[serde(rename = "MPG", default)]
    mpg: String,
    #[serde(rename = "Horsepower", default)]
    horsepower: String,
    #[serde(rename = "Weight", default)]
    weight: String,
    #[serde(rename = "Acceleration", default)]
    acceleration: String,
    #[serde(rename = "Cylinders", default)]
    cylinders: String,
    #[serde(rename = "Origin", default)]
    origin: String,
    #[serde(rename = "Displacement", default)]
    displacement: String,
}

/// Parse the header + rows, applying the retention invariant: a record is
/// kept only when MPG, horsepower, weight, and acceleration all coerce to
/// a positive number. Dropped rows never resurface.
pub fn parse_records<R: Read>(reader: R) -> Result<CarDataset, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    let mut total = 0usize;

    for row in rdr.deserialize::<RawRow>() {
        let row = row?;
        total += 1;
        if let Some(record) = convert_row(row) {
            records.push(record);
        }
    }

    if records.len() < total {
        log::debug!(
            "Dropped {} of {total} rows with missing required fields",
            total - records.len()
        );
    }

    Ok(CarDataset::from_records(records))
}

fn convert_row(row: RawRow) -> Option<CarRecord> {
    let origin = match row.origin.parse::<Origin>() {
        Ok(o) => o,
        Err(()) => {
            log::warn!("Dropping '{}': unrecognized origin '{}'", row.car, row.origin);
            return None;
        }
    };

    let mpg = coerce_positive(&row.mpg)?;
    let horsepower = coerce_positive(&row.horsepower)?;
    let weight = coerce_positive(&row.weight)?;
    let acceleration = coerce_positive(&row.acceleration)?;

    Some(CarRecord {
        name: row.car,
        manufacturer: row.manufacturer,
        origin,
        mpg,
        horsepower,
        weight,
        acceleration,
        cylinders: coerce_cylinders(&row.cylinders),
        displacement: coerce_positive(&row.displacement),
    })
}

/// Coerce a numeric cell. Unparseable, non-finite, and non-positive values
/// all count as missing, matching the source's `+x || null` rule.
fn coerce_positive(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    (v.is_finite() && v > 0.0).then_some(v)
}

fn coerce_cylinders(raw: &str) -> Option<u32> {
    let v: u32 = raw.trim().parse().ok()?;
    (v > 0).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Car,Manufacturer,MPG,Horsepower,Weight,Acceleration,Cylinders,Origin,Displacement";

    fn parse(rows: &str) -> CarDataset {
        let csv = format!("{HEADER}\n{rows}");
        parse_records(csv.as_bytes()).expect("parse")
    }

    #[test]
    fn retains_complete_rows_in_source_order() {
        let ds = parse(
            "Chevrolet Impala,Chevrolet,14.0,165.0,4209,12.0,8,American,350.0\n\
             Toyota Corolla,Toyota,31.0,75.0,2155,16.4,4,Japanese,97.0",
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].name, "Chevrolet Impala");
        assert_eq!(ds.records[0].cylinders, Some(8));
        assert_eq!(ds.records[1].origin, Origin::Japanese);
        assert_eq!(ds.records[1].displacement, Some(97.0));
    }

    #[test]
    fn drops_rows_missing_required_numerics() {
        let ds = parse(
            "No MPG,Ford,,100.0,3000,15.0,4,American,120.0\n\
             Bad HP,Ford,20.0,n/a,3000,15.0,4,American,120.0\n\
             Zero Weight,Ford,20.0,100.0,0,15.0,4,American,120.0\n\
             Kept,Ford,20.0,100.0,3000,15.0,4,American,120.0",
        );
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].name, "Kept");
    }

    #[test]
    fn missing_cylinders_and_displacement_are_field_level() {
        let ds = parse("Mazda RX-7,Mazda,23.7,100.0,2420,12.5,,Japanese,");
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].cylinders, None);
        assert_eq!(ds.records[0].displacement, None);
    }

    #[test]
    fn drops_unrecognized_origin() {
        let ds = parse("Mystery,Acme,20.0,100.0,3000,15.0,4,Atlantean,120.0");
        assert!(ds.is_empty());
    }

    #[test]
    fn malformed_header_is_an_error() {
        let result = parse_records("What,Ever\n1,2".as_bytes());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn empty_table_is_not_an_error() {
        let ds = parse_records(format!("{HEADER}\n").as_bytes()).expect("parse");
        assert!(ds.is_empty());
        assert!(ds.manufacturers.is_empty());
    }
}
