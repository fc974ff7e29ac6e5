use std::time::Instant;
use tracing::{debug, info};

use crate::analyzers::duration::duration_stats;
use crate::analyzers::station::station_stats;
use crate::analyzers::time::time_stats;
use crate::analyzers::types::{Section, Timings, TripReport};
use crate::analyzers::users::user_stats;
use crate::error::Result;
use crate::filter::{FilterCriteria, filter};
use crate::model::Dataset;

/// Filters `dataset` by `criteria` and runs every aggregator on the result.
pub fn analyze(dataset: &Dataset, criteria: FilterCriteria) -> Result<TripReport> {
    let selected = filter(dataset, &criteria);
    report_for(&selected, criteria)
}

/// Runs every aggregator over an already filtered dataset.
///
/// Empty selections never fail; the affected sections come back as
/// [`Section::NoData`]. Any other aggregator error is returned.
#[tracing::instrument(skip(selected), fields(trips = selected.len()))]
pub fn report_for(selected: &Dataset, criteria: FilterCriteria) -> Result<TripReport> {
    let mut timings = Timings::default();

    let started = Instant::now();
    let time = Section::from_result(time_stats(selected))?;
    timings.time = started.elapsed();

    let started = Instant::now();
    let stations = Section::from_result(station_stats(selected))?;
    timings.stations = started.elapsed();

    let started = Instant::now();
    let durations = duration_stats(selected);
    timings.durations = started.elapsed();

    let started = Instant::now();
    let users = user_stats(selected);
    timings.users = started.elapsed();

    debug!(?timings, "Aggregators finished");
    if selected.is_empty() {
        info!(month = %criteria.month, day = %criteria.day, "No trips match the selected filters");
    }

    Ok(TripReport {
        criteria,
        trip_count: selected.len(),
        time,
        stations,
        durations,
        users,
        timings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::{at, rider, trip};
    use crate::filter::{DayFilter, MonthFilter};
    use crate::model::{Schema, TripRecord};

    fn sample() -> Dataset {
        Dataset::new(
            Schema {
                gender: true,
                birth_year: false,
            },
            vec![
                trip(at(2017, 1, 2, 8), "A", "B", 100.0),
                trip(at(2017, 2, 6, 9), "B", "A", 200.0),
                TripRecord {
                    start_time: at(2017, 1, 3, 8),
                    ..rider(Some("Customer"), Some("Female"), None)
                },
            ],
        )
    }

    #[test]
    fn test_report_for_all() {
        let report = analyze(&sample(), FilterCriteria::default()).unwrap();

        assert_eq!(report.trip_count, 3);
        assert_eq!(report.time.available().unwrap().most_common_month, 1);
        assert_eq!(report.durations.total_seconds, 360.0);
        assert_eq!(report.users.user_types.len(), 2);
        assert!(matches!(report.users.genders, Section::Available(_)));
        assert_eq!(report.users.birth_years, Section::NotInSchema);
    }

    #[test]
    fn test_no_march_rows_reports_no_data_everywhere() {
        let report = analyze(
            &sample(),
            FilterCriteria::new(MonthFilter::March, DayFilter::All),
        )
        .unwrap();

        assert_eq!(report.trip_count, 0);
        assert!(report.time.is_no_data());
        assert!(report.stations.is_no_data());
        assert_eq!(report.durations.total_seconds, 0.0);
        assert!(report.durations.mean().is_err());
        assert!(report.users.user_types.is_empty());
        assert!(report.users.genders.is_no_data());
        assert_eq!(report.users.birth_years, Section::NotInSchema);
    }

    #[test]
    fn test_report_serializes_sections() {
        let report = analyze(
            &sample(),
            FilterCriteria::new(MonthFilter::February, DayFilter::Monday),
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["criteria"]["month"], "february");
        assert_eq!(json["criteria"]["day"], "monday");
        assert_eq!(json["time"]["status"], "available");
        assert_eq!(json["time"]["value"]["most_common_day"], "Monday");
        assert_eq!(json["stations"]["value"]["most_common_trip"], "B to A");
        assert_eq!(json["users"]["birth_years"]["status"], "not_in_schema");
        assert!(json.get("timings").is_none());
    }
}
