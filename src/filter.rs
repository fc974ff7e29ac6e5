//! Month and weekday predicates over a [`Dataset`].

use chrono::{Datelike, Weekday};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::model::{Dataset, TripRecord};

/// Month selection. The source data only covers January through June.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MonthFilter {
    #[default]
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    /// 1-based month index, or `None` for `All`.
    pub fn number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::January => Some(1),
            MonthFilter::February => Some(2),
            MonthFilter::March => Some(3),
            MonthFilter::April => Some(4),
            MonthFilter::May => Some(5),
            MonthFilter::June => Some(6),
        }
    }

    pub fn parse(name: &str) -> Option<MonthFilter> {
        MonthFilter::from_str(name.trim(), true).ok()
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DayFilter {
    #[default]
    All,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayFilter {
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayFilter::All => None,
            DayFilter::Monday => Some(Weekday::Mon),
            DayFilter::Tuesday => Some(Weekday::Tue),
            DayFilter::Wednesday => Some(Weekday::Wed),
            DayFilter::Thursday => Some(Weekday::Thu),
            DayFilter::Friday => Some(Weekday::Fri),
            DayFilter::Saturday => Some(Weekday::Sat),
            DayFilter::Sunday => Some(Weekday::Sun),
        }
    }

    pub fn parse(name: &str) -> Option<DayFilter> {
        DayFilter::from_str(name.trim(), true).ok()
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    /// True when the trip passes both the month and the weekday predicate.
    pub fn matches(&self, trip: &TripRecord) -> bool {
        let month_ok = self
            .month
            .number()
            .is_none_or(|m| trip.start_time.month() == m);
        let day_ok = self
            .day
            .weekday()
            .is_none_or(|d| trip.start_time.weekday() == d);
        month_ok && day_ok
    }
}

/// Returns the trips of `dataset` that match `criteria`, in their original order.
///
/// The input is left untouched; the result carries the same schema.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    let trips: Vec<TripRecord> = dataset
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect();

    debug!(
        month = %criteria.month,
        day = %criteria.day,
        before = dataset.len(),
        after = trips.len(),
        "Filter applied"
    );

    Dataset::new(dataset.schema, trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Schema;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn trip_on(month: u32, day: u32) -> TripRecord {
        TripRecord {
            start_time: NaiveDate::from_ymd_opt(2017, month, day)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            end_time: None,
            start_station: format!("S{month}"),
            end_station: format!("E{day}"),
            trip_duration: f64::from(day * 10),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    fn sample() -> Dataset {
        // 2017-01-02 Monday, 2017-01-03 Tuesday, 2017-02-06 Monday, 2017-06-04 Sunday
        Dataset::new(
            Schema::default(),
            vec![
                trip_on(1, 2),
                trip_on(1, 3),
                trip_on(2, 6),
                trip_on(6, 4),
            ],
        )
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let ds = sample();
        let out = filter(&ds, &FilterCriteria::default());
        assert_eq!(out, ds);
    }

    #[test]
    fn test_month_only() {
        let out = filter(
            &sample(),
            &FilterCriteria::new(MonthFilter::January, DayFilter::All),
        );
        assert_eq!(out.trips, vec![trip_on(1, 2), trip_on(1, 3)]);
    }

    #[test]
    fn test_day_only() {
        let out = filter(
            &sample(),
            &FilterCriteria::new(MonthFilter::All, DayFilter::Monday),
        );
        assert_eq!(out.trips, vec![trip_on(1, 2), trip_on(2, 6)]);
    }

    #[test]
    fn test_month_and_day_combine() {
        let out = filter(
            &sample(),
            &FilterCriteria::new(MonthFilter::January, DayFilter::Monday),
        );
        assert_eq!(out.trips, vec![trip_on(1, 2)]);
    }

    #[test]
    fn test_no_match_gives_empty_dataset_with_schema() {
        let mut ds = sample();
        ds.schema.gender = true;
        let out = filter(&ds, &FilterCriteria::new(MonthFilter::March, DayFilter::All));
        assert!(out.is_empty());
        assert!(out.schema.gender);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn test_parse_names_case_insensitively() {
        assert_eq!(MonthFilter::parse("JUNE"), Some(MonthFilter::June));
        assert_eq!(MonthFilter::parse("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("july"), None);
        assert_eq!(DayFilter::parse("Sunday"), Some(DayFilter::Sunday));
        assert_eq!(DayFilter::parse("funday"), None);
    }

    #[test]
    fn test_display_uses_lowercase_names() {
        assert_eq!(MonthFilter::February.to_string(), "february");
        assert_eq!(DayFilter::All.to_string(), "all");
    }

    fn month_strategy() -> impl Strategy<Value = MonthFilter> {
        prop::sample::select(MonthFilter::value_variants().to_vec())
    }

    fn day_strategy() -> impl Strategy<Value = DayFilter> {
        prop::sample::select(DayFilter::value_variants().to_vec())
    }

    fn dataset_strategy() -> impl Strategy<Value = Dataset> {
        prop::collection::vec((1u32..=6, 1u32..=28), 0..40).prop_map(|days| {
            Dataset::new(
                Schema::default(),
                days.into_iter().map(|(m, d)| trip_on(m, d)).collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            ds in dataset_strategy(),
            m in month_strategy(),
            d in day_strategy(),
        ) {
            let criteria = FilterCriteria::new(m, d);
            let once = filter(&ds, &criteria);
            let twice = filter(&once, &criteria);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_identity_filter_keeps_size(ds in dataset_strategy()) {
            prop_assert_eq!(filter(&ds, &FilterCriteria::default()).len(), ds.len());
        }

        #[test]
        fn prop_filter_partitions_rows(
            ds in dataset_strategy(),
            m in month_strategy(),
            d in day_strategy(),
        ) {
            let criteria = FilterCriteria::new(m, d);
            let out = filter(&ds, &criteria);

            prop_assert!(out.iter().all(|t| criteria.matches(t)));
            let dropped = ds.iter().filter(|t| !criteria.matches(t)).count();
            prop_assert_eq!(out.len() + dropped, ds.len());

            // Kept rows appear in source order.
            let kept: Vec<_> = ds.iter().filter(|t| criteria.matches(t)).cloned().collect();
            prop_assert_eq!(out.trips, kept);
        }
    }
}
