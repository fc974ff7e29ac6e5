//! Console questions for the interactive session.
//!
//! Answers are parsed by plain functions so the rules can be tested without
//! a terminal; `dialoguer` only handles reading the line.

use anyhow::Result;
use bikeshare_stats::config::City;
use bikeshare_stats::filter::{DayFilter, FilterCriteria, MonthFilter};
use bikeshare_stats::model::Dataset;
use bikeshare_stats::output::{render_rows, rule};
use dialoguer::Input;
use tracing::debug;

pub const PAGE_SIZE: usize = 5;

const CITY_QUESTION: &str = "Which city would you like to explore? (chicago, new york city, washington)";
const CITY_INVALID: &str = "Sorry, invalid input. Please choose from chicago, new york city, or washington.";
const MONTH_QUESTION: &str = "Which month would you like to explore? (all, january, february, ... , june)";
const MONTH_INVALID: &str = "Sorry, invalid month input. Please choose a month from january to june or 'all'.";
const DAY_QUESTION: &str = "Which day of the week would you like to explore? (all, monday, tuesday, ... sunday)";
const DAY_INVALID: &str = "Sorry, invalid day input. Please choose a day from monday to sunday or 'all'.";
const RAW_QUESTION: &str = "Would you like to see 5 lines of raw data? Enter yes or no";
const RAW_INVALID: &str = "Invalid input. Please enter 'yes' or 'no'.";
const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no";

/// `yes`/`no` in any case; anything else is rejected.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Only an explicit `yes` restarts; any other answer ends the session.
pub fn wants_restart(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn read_answer(question: &str) -> Result<String> {
    let answer = Input::<String>::new()
        .with_prompt(question)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}

/// Repeats `question` until `parse` accepts the answer.
fn ask<T>(question: &str, invalid: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    loop {
        let answer = read_answer(question)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => {
                debug!(answer = %answer, "Rejected prompt answer");
                println!("{invalid}");
            }
        }
    }
}

/// Asks for the city, month and weekday to analyze.
pub fn get_filters() -> Result<(City, FilterCriteria)> {
    println!("Hello! Let's explore some US bikeshare data!");

    let city = ask(CITY_QUESTION, CITY_INVALID, City::parse)?;
    let month = ask(MONTH_QUESTION, MONTH_INVALID, MonthFilter::parse)?;
    let day = ask(DAY_QUESTION, DAY_INVALID, DayFilter::parse)?;

    println!("{}", rule());
    Ok((city, FilterCriteria::new(month, day)))
}

/// Shows raw rows five at a time for as long as the user answers `yes`.
pub fn display_raw_data(dataset: &Dataset) -> Result<()> {
    let mut start = 0;
    let stdout = std::io::stdout();

    loop {
        if !ask(RAW_QUESTION, RAW_INVALID, parse_yes_no)? {
            break;
        }
        render_rows(&mut stdout.lock(), dataset, start, PAGE_SIZE)?;
        start += PAGE_SIZE;
        if start >= dataset.len() {
            println!("No more data to display.");
            break;
        }
    }

    Ok(())
}

pub fn restart() -> Result<bool> {
    println!();
    Ok(wants_restart(&read_answer(RESTART_QUESTION)?))
}
