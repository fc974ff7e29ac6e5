//! Trip statistics over a filtered dataset.
//!
//! Four independent aggregators (travel times, stations, durations, users)
//! each read the dataset and produce a report record. `analyzer` runs them in
//! sequence and bundles the results for presentation.

pub mod analyzer;
pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

#[cfg(test)]
pub(crate) mod fixtures;
