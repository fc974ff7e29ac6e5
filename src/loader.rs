//! Reads a city's trip CSV into a [`Dataset`].
//!
//! Loading is fail-fast: an unreadable file, a missing required column, an
//! undecodable row or an unparseable `Start Time` aborts the whole load. Rows
//! are never skipped, so aggregate counts always cover the full file.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{City, CityConfig};
use crate::error::{BikeshareError, Result};
use crate::model::{Dataset, Schema, TripRecord};
use crate::parser::parse_start_time;

const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// One CSV row before the start time is parsed.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads the configured source file for `city`.
pub fn load_city(config: &CityConfig, city: City) -> Result<Dataset> {
    let path = config.source_path(city);
    info!(city = %city, path = %path.display(), "Loading trip data");
    load_path(&path)
}

#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_path(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| BikeshareError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;

    info!(
        rows = dataset.len(),
        gender = dataset.schema.gender,
        birth_year = dataset.schema.birth_year,
        "Trip data loaded"
    );
    Ok(dataset)
}

/// Reads trips from any CSV source with a header row.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|source| BikeshareError::MalformedRecord { line: 1, source })?
        .clone();
    debug!(columns = headers.len(), "CSV header read");

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn(column));
        }
    }

    let schema = Schema {
        gender: headers.iter().any(|h| h == GENDER_COLUMN),
        birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
    };

    let mut trips = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        let more = rdr
            .read_record(&mut record)
            .map_err(|source| BikeshareError::MalformedRecord {
                line: rdr.position().line(),
                source,
            })?;
        if !more {
            break;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTrip = record
            .deserialize(Some(&headers))
            .map_err(|source| BikeshareError::MalformedRecord { line, source })?;

        let start_time = parse_start_time(&raw.start_time).ok_or_else(|| {
            BikeshareError::MalformedTimestamp {
                line,
                value: raw.start_time.clone(),
            }
        })?;

        trips.push(TripRecord {
            start_time,
            end_time: raw.end_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            trip_duration: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.filter(|y| y.is_finite()),
        });
    }

    Ok(Dataset::new(schema, trips))
}
