use crate::analyzers::types::DurationReport;
use crate::analyzers::utility::mean;
use crate::model::Dataset;

/// Total and mean trip duration. An empty dataset totals 0 with no mean.
pub fn duration_stats(dataset: &Dataset) -> DurationReport {
    let durations: Vec<f64> = dataset.iter().map(|t| t.trip_duration).collect();

    DurationReport {
        trip_count: durations.len(),
        // f64 `sum` of nothing is -0.0
        total_seconds: durations.iter().fold(0.0, |acc, d| acc + d),
        mean_seconds: mean(&durations),
    }
}
