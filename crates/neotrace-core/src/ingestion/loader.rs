//! Loaders for the two source datasets
//!
//! `load_neos` reads the NEO CSV export (one row per object, named
//! columns), `load_approaches` reads the close-approach JSON feed (one
//! fixed-position array per event). Both coerce raw fields once at load
//! time; anything that fails coercion is a fatal error.

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{CloseApproach, NearEarthObject};

/// Columns consumed from the NEO CSV; every other column is ignored
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: String,
    pha: String,
    diameter: String,
}

/// Field positions in a close-approach feed record
const POS_DESIGNATION: usize = 0;
const POS_TIME: usize = 3;
const POS_DISTANCE: usize = 4;
const POS_VELOCITY: usize = 7;

/// Top-level shape of the close-approach feed
#[derive(Debug, Deserialize)]
struct CadFeed {
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Read near-Earth objects from a CSV file.
///
/// Empty names become `None`, an empty diameter becomes NaN, and the
/// hazardous flag is decoded by [`decode_hazard_flag`].
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut neos = Vec::new();
    for row in reader.deserialize() {
        let row: NeoRow = row?;
        let name = non_empty(&row.name);
        let diameter = parse_diameter(&row.diameter).ok_or_else(|| {
            Error::data_format(
                path.display().to_string(),
                format!("object '{}': unparseable diameter '{}'", row.pdes, row.diameter),
            )
        })?;
        let hazardous = decode_hazard_flag(&row.pha);
        neos.push(NearEarthObject::new(row.pdes, name, diameter, hazardous));
    }

    tracing::info!(count = neos.len(), path = %path.display(), "loaded near-Earth objects");
    Ok(neos)
}

/// Read close approaches from the JSON feed.
pub fn load_approaches<P: AsRef<Path>>(path: P) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let feed: CadFeed = serde_json::from_reader(BufReader::new(file))?;

    let source = path.display().to_string();
    let mut approaches = Vec::with_capacity(feed.data.len());
    for (row_no, row) in feed.data.iter().enumerate() {
        let designation = field_str(row, POS_DESIGNATION, row_no, &source)?;
        let time = CloseApproach::parse_time(field_str(row, POS_TIME, row_no, &source)?)?;
        let distance = field_f64(row, POS_DISTANCE, row_no, &source)?;
        let velocity = field_f64(row, POS_VELOCITY, row_no, &source)?;
        approaches.push(CloseApproach::new(designation, time, distance, velocity));
    }

    tracing::info!(count = approaches.len(), path = %path.display(), "loaded close approaches");
    Ok(approaches)
}

/// Decode the source hazard flag: trimmed-empty means false, any
/// non-empty marker means true.
fn decode_hazard_flag(flag: &str) -> bool {
    !flag.trim().is_empty()
}

/// An empty or whitespace-only field has no value
fn non_empty(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Empty diameter means unknown (NaN); otherwise it must parse as a float
fn parse_diameter(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Some(f64::NAN)
    } else {
        trimmed.parse::<f64>().ok()
    }
}

fn field_str<'a>(row: &'a [Value], pos: usize, row_no: usize, source: &str) -> Result<&'a str> {
    row.get(pos).and_then(Value::as_str).ok_or_else(|| {
        Error::data_format(
            source,
            format!("record {row_no}: missing string field at position {pos}"),
        )
    })
}

fn field_f64(row: &[Value], pos: usize, row_no: usize, source: &str) -> Result<f64> {
    // The feed serializes numbers as strings, but accept bare numbers too.
    match row.get(pos) {
        Some(Value::String(raw)) => raw.trim().parse::<f64>().map_err(|_| {
            Error::data_format(
                source,
                format!("record {row_no}: expected a number at position {pos}, got '{raw}'"),
            )
        }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            Error::data_format(
                source,
                format!("record {row_no}: expected a number at position {pos}"),
            )
        }),
        _ => Err(Error::data_format(
            source,
            format!("record {row_no}: missing numeric field at position {pos}"),
        )),
    }
}
