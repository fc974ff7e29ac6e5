use crate::analyzers::types::StationReport;
use crate::analyzers::utility::mode;
use crate::error::{BikeshareError, Result};
use crate::model::Dataset;

/// Joins a start and end station into the directed trip key.
pub fn trip_key(start: &str, end: &str) -> String {
    format!("{start} to {end}")
}

/// Most common start station, end station and directed trip.
///
/// # Errors
///
/// Returns [`BikeshareError::NoData`] when the dataset is empty.
pub fn station_stats(dataset: &Dataset) -> Result<StationReport> {
    let start = mode(dataset.iter().map(|t| t.start_station.as_str()))
        .ok_or(BikeshareError::NoData)?;
    let end =
        mode(dataset.iter().map(|t| t.end_station.as_str())).ok_or(BikeshareError::NoData)?;
    let trip = mode(
        dataset
            .iter()
            .map(|t| trip_key(&t.start_station, &t.end_station)),
    )
    .ok_or(BikeshareError::NoData)?;

    Ok(StationReport {
        most_common_start_station: start.to_string(),
        most_common_end_station: end.to_string(),
        most_common_trip: trip,
    })
}
