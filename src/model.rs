//! In-memory trip table.

use chrono::{NaiveDateTime, Weekday};
use serde::Serialize;

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A single bikeshare trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub start_station: String,
    pub end_station: String,
    /// Seconds.
    pub trip_duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

/// Which optional columns the city's source file carries.
///
/// Decided once from the CSV header; a column that exists but is blank on
/// some rows still counts as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub gender: bool,
    pub birth_year: bool,
}

/// Trips in source order together with the schema they were read under.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub schema: Schema,
    pub trips: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(schema: Schema, trips: Vec<TripRecord>) -> Self {
        Self { schema, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.trips.iter()
    }

    /// Returns up to `len` trips starting at `start`; empty once past the end.
    pub fn page(&self, start: usize, len: usize) -> &[TripRecord] {
        let start = start.min(self.trips.len());
        let end = start.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(day: u32) -> TripRecord {
        TripRecord {
            start_time: NaiveDate::from_ymd_opt(2017, 1, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            end_time: None,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            trip_duration: 60.0,
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_page_walks_rows_in_chunks() {
        let ds = Dataset::new(Schema::default(), (1..=7).map(trip).collect());

        assert_eq!(ds.page(0, 5).len(), 5);
        assert_eq!(ds.page(5, 5).len(), 2);
        assert!(ds.page(10, 5).is_empty());
        assert_eq!(ds.page(5, 5)[0], trip(6));
    }

    #[test]
    fn test_weekday_names_cover_week() {
        let week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        let names: Vec<_> = week.iter().map(|d| weekday_name(*d)).collect();
        assert_eq!(names.first(), Some(&"Monday"));
        assert_eq!(names.last(), Some(&"Sunday"));
    }
}
