//! Report records produced by the aggregators.

use serde::Serialize;
use std::time::Duration;

use crate::error::{BikeshareError, Result};
use crate::filter::FilterCriteria;

/// Outcome of one report section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Section<T> {
    /// The city's data has no such column.
    NotInSchema,
    /// The column exists but the selection has nothing to aggregate.
    NoData,
    Available(T),
}

impl<T> Section<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            Section::Available(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Section::NoData)
    }
}

impl<T> Section<T> {
    /// Maps an aggregator result onto a section. Only
    /// [`BikeshareError::NoData`] becomes [`Section::NoData`]; any other error
    /// is passed back to the caller.
    pub fn from_result(result: Result<T>) -> Result<Self> {
        match result {
            Ok(v) => Ok(Section::Available(v)),
            Err(BikeshareError::NoData) => Ok(Section::NoData),
            Err(e) => Err(e),
        }
    }
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport {
    /// 1 = January.
    pub most_common_month: u32,
    pub most_common_day: String,
    /// 0..=23
    pub most_common_hour: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub most_common_start_station: String,
    pub most_common_end_station: String,
    /// `"<start> to <end>"`
    pub most_common_trip: String,
}

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub trip_count: usize,
    pub total_seconds: f64,
    pub mean_seconds: Option<f64>,
}

impl DurationReport {
    pub fn mean(&self) -> Result<f64> {
        self.mean_seconds.ok_or(BikeshareError::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub user_types: Vec<ValueCount>,
    pub genders: Section<Vec<ValueCount>>,
    pub birth_years: Section<BirthYearStats>,
}

/// Wall time spent in each aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timings {
    pub time: Duration,
    pub stations: Duration,
    pub durations: Duration,
    pub users: Duration,
}

/// Everything printed for one run of the tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub criteria: FilterCriteria,
    pub trip_count: usize,
    pub time: Section<TimeReport>,
    pub stations: Section<StationReport>,
    pub durations: DurationReport,
    pub users: UserReport,
    #[serde(skip)]
    pub timings: Timings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_maps_only_no_data() {
        assert_eq!(Section::from_result(Ok(3)).unwrap(), Section::Available(3));
        assert_eq!(
            Section::<u32>::from_result(Err(BikeshareError::NoData)).unwrap(),
            Section::NoData
        );

        let err = Section::<u32>::from_result(Err(BikeshareError::MissingColumn("Start Time")))
            .unwrap_err();
        assert!(matches!(err, BikeshareError::MissingColumn("Start Time")));
    }
}
