use crate::analyzers::types::{BirthYearStats, Section, UserReport};
use crate::analyzers::utility::{mode, value_counts};
use crate::model::Dataset;

/// User type counts plus gender and birth year statistics where the city
/// records them.
///
/// Optional sections follow [`crate::model::Schema`]: a missing column gives
/// [`Section::NotInSchema`], a present column with no values in the selection
/// gives [`Section::NoData`]. Blank cells are never counted.
pub fn user_stats(dataset: &Dataset) -> UserReport {
    let user_types = value_counts(dataset.iter().filter_map(|t| t.user_type.as_deref()));

    let genders = if dataset.schema.gender {
        let counts = value_counts(dataset.iter().filter_map(|t| t.gender.as_deref()));
        if counts.is_empty() {
            Section::NoData
        } else {
            Section::Available(counts)
        }
    } else {
        Section::NotInSchema
    };

    let birth_years = if dataset.schema.birth_year {
        birth_year_stats(dataset).map_or(Section::NoData, Section::Available)
    } else {
        Section::NotInSchema
    };

    UserReport {
        user_types,
        genders,
        birth_years,
    }
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years: Vec<i64> = dataset
        .iter()
        .filter_map(|t| t.birth_year)
        .map(|y| y as i64)
        .collect();

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}
