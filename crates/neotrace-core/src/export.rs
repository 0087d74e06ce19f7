//! Serialize query results to CSV or JSON
//!
//! Both writers consume any stream of linked approaches and an output
//! sink, so they compose directly with [`crate::query::limit`].

use serde::Serialize;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::query::LinkedApproach;

/// Column order of the tabular export
const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Flat row shape for the tabular export; field order matches CSV_HEADER
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: f64,
    potentially_hazardous: bool,
}

/// Nested object shape for the JSON export
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    neo: JsonNeo<'a>,
}

#[derive(Debug, Serialize)]
struct JsonNeo<'a> {
    name: Option<&'a str>,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
    designation: &'a str,
}

/// Write a header row followed by one 7-column row per approach.
///
/// A missing name renders as the empty string; an unknown diameter
/// renders as `NaN`.
pub fn write_csv<'a, I, W>(results: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
    W: Write,
{
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(CSV_HEADER)?;

    for item in results {
        out.serialize(CsvRow {
            datetime_utc: item.approach.time_str(),
            distance_au: item.approach.distance,
            velocity_km_s: item.approach.velocity,
            designation: &item.approach.designation,
            name: item.neo.name.as_deref().unwrap_or(""),
            diameter_km: item.neo.diameter,
            potentially_hazardous: item.neo.hazardous,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Write a JSON array of objects, each with a nested `neo` object.
///
/// JSON has no NaN, so an unknown diameter serializes as `null`; a
/// missing name does too.
pub fn write_json<'a, I, W>(results: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
    W: Write,
{
    let rows: Vec<JsonRow> = results
        .into_iter()
        .map(|item| JsonRow {
            datetime_utc: item.approach.time_str(),
            distance_au: item.approach.distance,
            velocity_km_s: item.approach.velocity,
            designation: &item.approach.designation,
            neo: JsonNeo {
                name: item.neo.name.as_deref(),
                diameter_km: (!item.neo.diameter.is_nan()).then_some(item.neo.diameter),
                potentially_hazardous: item.neo.hazardous,
                designation: &item.neo.designation,
            },
        })
        .collect();

    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Write results to `path`, picking the format from its extension.
pub fn write_to_path<'a, I>(results: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => write_csv(results, BufWriter::new(File::create(path)?)),
        Some("json") => write_json(results, BufWriter::new(File::create(path)?)),
        other => Err(Error::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
