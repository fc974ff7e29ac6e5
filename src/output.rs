//! Output formatting for trip reports.
//!
//! Supports the console text layout, JSON serialization, and raw row pages.

use anyhow::Result;
use chrono::Month;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::analyzers::types::{Section, TripReport, ValueCount};
use crate::model::{Dataset, TripRecord};

const RULE_WIDTH: usize = 40;
const NO_DATA: &str = "No data for the selected filters.";

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &TripReport) {
    debug!("{:#?}", report);
}

/// Writes a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Prints a report as pretty-printed JSON on stdout.
pub fn print_json(report: &TripReport) -> Result<()> {
    let stdout = std::io::stdout();
    write_json(&mut stdout.lock(), report)
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

fn section_footer<W: Write>(out: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "This took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", rule())?;
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, title: &str, counts: &[ValueCount]) -> Result<()> {
    writeln!(out, "{title}:")?;
    if counts.is_empty() {
        writeln!(out, "  {NO_DATA}")?;
    }
    for c in counts {
        writeln!(out, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

/// Writes the four report sections in the console layout.
pub fn render_report<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    match &report.time {
        Section::Available(t) => {
            writeln!(out, "Most common month: {}", month_name(t.most_common_month))?;
            writeln!(out, "Most common day of the week: {}", t.most_common_day)?;
            writeln!(out, "Most common start hour: {}", t.most_common_hour)?;
        }
        _ => writeln!(out, "{NO_DATA}")?,
    }
    section_footer(out, report.timings.time)?;

    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    match &report.stations {
        Section::Available(s) => {
            writeln!(out, "Most common start station: {}", s.most_common_start_station)?;
            writeln!(out, "Most common end station: {}", s.most_common_end_station)?;
            writeln!(out, "Most common trip: {}", s.most_common_trip)?;
        }
        _ => writeln!(out, "{NO_DATA}")?,
    }
    section_footer(out, report.timings.stations)?;

    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let d = &report.durations;
    writeln!(out, "Total travel time: {} seconds", d.total_seconds)?;
    match d.mean_seconds {
        Some(mean) => writeln!(out, "Mean travel time: {mean} seconds")?,
        None => writeln!(out, "Mean travel time: {NO_DATA}")?,
    }
    section_footer(out, report.timings.durations)?;

    writeln!(out, "\nCalculating User Stats...\n")?;
    let u = &report.users;
    write_counts(out, "User Type Counts", &u.user_types)?;
    match &u.genders {
        Section::NotInSchema => {}
        Section::NoData => write_counts(out, "Gender Counts", &[])?,
        Section::Available(counts) => write_counts(out, "Gender Counts", counts)?,
    }
    match &u.birth_years {
        Section::NotInSchema => {}
        Section::NoData => writeln!(out, "Birth year: {NO_DATA}")?,
        Section::Available(b) => {
            writeln!(out, "Earliest birth year: {}", b.earliest)?;
            writeln!(out, "Most recent birth year: {}", b.most_recent)?;
            writeln!(out, "Most common birth year: {}", b.most_common)?;
        }
    }
    section_footer(out, report.timings.users)?;

    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    index: usize,
    trip: &TripRecord,
    dataset: &Dataset,
) -> Result<()> {
    write!(
        out,
        "{index:>6}  {}  {}  {:>10}s  {} -> {}  {}",
        trip.start_time.format("%Y-%m-%d %H:%M:%S"),
        trip.end_time.as_deref().unwrap_or("-"),
        trip.trip_duration,
        trip.start_station,
        trip.end_station,
        trip.user_type.as_deref().unwrap_or("-"),
    )?;
    if dataset.schema.gender {
        write!(out, "  {}", trip.gender.as_deref().unwrap_or("-"))?;
    }
    if dataset.schema.birth_year {
        match trip.birth_year {
            Some(y) => write!(out, "  {}", y as i64)?,
            None => write!(out, "  -")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Writes up to `len` raw rows starting at `start` and returns how many were written.
pub fn render_rows<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    start: usize,
    len: usize,
) -> Result<usize> {
    let page = dataset.page(start, len);
    for (offset, trip) in page.iter().enumerate() {
        write_row(out, start + offset, trip, dataset)?;
    }
    Ok(page.len())
}
