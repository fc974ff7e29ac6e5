use chrono::{Datelike, Timelike};

use crate::analyzers::types::TimeReport;
use crate::analyzers::utility::mode;
use crate::error::{BikeshareError, Result};
use crate::model::{Dataset, weekday_name};

/// Most common month, weekday and start hour.
///
/// Weekdays are counted by name, so a tie goes to the alphabetically first
/// day name.
///
/// # Errors
///
/// Returns [`BikeshareError::NoData`] when the dataset is empty.
pub fn time_stats(dataset: &Dataset) -> Result<TimeReport> {
    let month =
        mode(dataset.iter().map(|t| t.start_time.month())).ok_or(BikeshareError::NoData)?;
    let day = mode(dataset.iter().map(|t| weekday_name(t.start_time.weekday())))
        .ok_or(BikeshareError::NoData)?;
    let hour =
        mode(dataset.iter().map(|t| t.start_time.hour())).ok_or(BikeshareError::NoData)?;

    Ok(TimeReport {
        most_common_month: month,
        most_common_day: day.to_string(),
        most_common_hour: hour,
    })
}
