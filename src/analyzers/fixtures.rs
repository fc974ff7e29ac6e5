//! Trip builders shared by the aggregator tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::TripRecord;

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap()
}

pub fn trip(start: NaiveDateTime, from: &str, to: &str, secs: f64) -> TripRecord {
    TripRecord {
        start_time: start,
        end_time: None,
        start_station: from.to_string(),
        end_station: to.to_string(),
        trip_duration: secs,
        user_type: Some("Subscriber".to_string()),
        gender: None,
        birth_year: None,
    }
}

pub fn rider(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<f64>) -> TripRecord {
    TripRecord {
        user_type: user_type.map(str::to_string),
        gender: gender.map(str::to_string),
        birth_year,
        ..trip(at(2017, 1, 2, 8), "A", "B", 60.0)
    }
}
