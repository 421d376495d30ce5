//! JSON Reference Table Loader
//!
//! Loads a department reference table from a JSON file at startup.
//!
//! Expected format:
//! ```json
//! [
//!   { "name": "Dakar", "lat": 14.6928, "lon": -17.4467 },
//!   { "name": "Pikine", "lat": 14.7645, "lng": -17.3907 }
//! ]
//! ```

use crate::domain::entities::AdministrativeUnit;
use crate::domain::error::ResolveError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct UnitRecord {
    name: String,
    lat: f64,
    #[serde(alias = "lng")]
    lon: f64,
}

/// Read a reference table from `path`.
///
/// Any I/O or parse failure, and an empty table, is reported as
/// `ResolveError::Configuration` so that startup aborts.
pub fn load_units_from_file(path: impl AsRef<Path>) -> Result<Vec<AdministrativeUnit>, ResolveError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| {
        ResolveError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;

    let records: Vec<UnitRecord> = serde_json::from_str(&raw).map_err(|e| {
        ResolveError::Configuration(format!("cannot parse {}: {}", path.display(), e))
    })?;

    if records.is_empty() {
        return Err(ResolveError::Configuration(format!(
            "reference table {} is empty",
            path.display()
        )));
    }

    tracing::info!(
        "loaded {} reference units from {}",
        records.len(),
        path.display()
    );

    Ok(records
        .into_iter()
        .map(|r| AdministrativeUnit::new(r.name, r.lat, r.lon))
        .collect())
}
