// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Descriptive statistics over a restricted dataset.
//!
//! Every "most common" value uses stable-mode semantics: the most frequent
//! value, ties broken by earliest occurrence in input order. The four
//! computations are independent, read-only, and require no prior sorting.

use crate::error::CoreError;
use bikeshare_domain::TripRecord;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Title-cased name of the most common travel month.
    pub common_month: String,
    /// Title-cased name of the most common travel weekday.
    pub common_weekday: String,
    /// The most common start hour, 0-23.
    pub common_start_hour: u32,
}

/// Total and average trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    /// Sum of trip durations in seconds. Zero for an empty dataset.
    pub total_seconds: f64,
    /// Arithmetic mean trip duration in seconds. `None` for an empty
    /// dataset, where the mean is undefined.
    pub mean_seconds: Option<f64>,
}

/// Most popular stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    /// The most common start station.
    pub popular_start: String,
    /// The most common end station.
    pub popular_end: String,
}

/// Birth-year summary over the records that carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearSummary {
    /// The earliest recorded birth year.
    pub earliest: i32,
    /// The most recent recorded birth year.
    pub latest: i32,
    /// The stable-mode birth year.
    pub most_common: i32,
}

/// User demographics.
///
/// The gender table and birth-year summary are `None` ("unavailable") when
/// no record in the dataset carries the field at all — Washington's export
/// has neither column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// User-type frequencies, descending by count, ties by first-seen order.
    pub user_type_counts: Vec<(String, u64)>,
    /// Gender frequencies over the records that carry a gender, ordered the
    /// same way; `None` when the field is absent from the dataset.
    pub gender_counts: Option<Vec<(String, u64)>>,
    /// Birth-year summary; `None` when the field is absent from the dataset.
    pub birth_year_summary: Option<BirthYearSummary>,
}

/// The most frequent value, ties broken by earliest occurrence.
///
/// Strictly-greater comparison while scanning in input order means the first
/// occurrence of the winning value decides a tie deterministically.
fn stable_mode<T: Clone + Eq + Hash>(values: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&T, usize)> = None;
    for value in values {
        let count: usize = counts.get(value).copied().unwrap_or(0);
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.clone())
}

/// Frequency table ordered by descending count, ties by first-seen order.
fn frequency_table<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: Iterator<Item = &'a str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<(String, u64)> = Vec::new();

    for value in values {
        if let Some(&slot) = index.get(value) {
            if let Some(entry) = table.get_mut(slot) {
                entry.1 += 1;
            }
        } else {
            index.insert(value.to_string(), table.len());
            table.push((value.to_string(), 1));
        }
    }

    // Stable sort: equal counts keep their first-seen relative order.
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Computes the most frequent times of travel.
///
/// # Errors
///
/// Returns `CoreError::EmptyDataset` if the restricted dataset is empty:
/// the mode of an empty sequence is undefined and is reported as a
/// distinguishable condition rather than defaulted.
pub fn time_stats(records: &[TripRecord]) -> Result<TimeStats, CoreError> {
    let months: Vec<String> = records.iter().map(|r| r.month_name().to_string()).collect();
    let weekdays: Vec<String> = records
        .iter()
        .map(|r| r.weekday_name().to_string())
        .collect();
    let hours: Vec<u32> = records.iter().map(TripRecord::start_hour).collect();

    let (Some(common_month), Some(common_weekday), Some(common_start_hour)) = (
        stable_mode(&months),
        stable_mode(&weekdays),
        stable_mode(&hours),
    ) else {
        return Err(CoreError::EmptyDataset {
            computation: "time statistics",
        });
    };

    Ok(TimeStats {
        common_month,
        common_weekday,
        common_start_hour,
    })
}

/// Computes the total and mean trip duration.
///
/// Defined for every input: an empty dataset totals zero seconds with an
/// undefined (`None`) mean.
#[must_use]
pub fn duration_stats(records: &[TripRecord]) -> DurationStats {
    let total_seconds: f64 = records.iter().map(TripRecord::trip_duration).sum();

    #[allow(clippy::cast_precision_loss)]
    let mean_seconds: Option<f64> = if records.is_empty() {
        None
    } else {
        Some(total_seconds / records.len() as f64)
    };

    DurationStats {
        total_seconds,
        mean_seconds,
    }
}

/// Computes the most popular start and end stations.
///
/// # Errors
///
/// Returns `CoreError::EmptyDataset` if the restricted dataset is empty.
pub fn station_stats(records: &[TripRecord]) -> Result<StationStats, CoreError> {
    let starts: Vec<String> = records
        .iter()
        .map(|r| r.start_station().to_string())
        .collect();
    let ends: Vec<String> = records
        .iter()
        .map(|r| r.end_station().to_string())
        .collect();

    let (Some(popular_start), Some(popular_end)) = (stable_mode(&starts), stable_mode(&ends))
    else {
        return Err(CoreError::EmptyDataset {
            computation: "station statistics",
        });
    };

    Ok(StationStats {
        popular_start,
        popular_end,
    })
}

/// Computes user demographics.
///
/// Always defined: an empty dataset yields an empty user-type table and
/// unavailable gender/birth-year sections.
#[must_use]
pub fn user_stats(records: &[TripRecord]) -> UserStats {
    let user_type_counts: Vec<(String, u64)> =
        frequency_table(records.iter().map(TripRecord::user_type));

    let genders: Vec<&str> = records.iter().filter_map(TripRecord::gender).collect();
    let gender_counts: Option<Vec<(String, u64)>> = if genders.is_empty() {
        None
    } else {
        Some(frequency_table(genders.into_iter()))
    };

    let birth_years: Vec<i32> = records.iter().filter_map(TripRecord::birth_year).collect();
    let birth_year_summary: Option<BirthYearSummary> = summarize_birth_years(&birth_years);

    UserStats {
        user_type_counts,
        gender_counts,
        birth_year_summary,
    }
}

/// Summarizes the birth years that are present, or reports unavailability.
fn summarize_birth_years(birth_years: &[i32]) -> Option<BirthYearSummary> {
    let earliest: i32 = birth_years.iter().copied().min()?;
    let latest: i32 = birth_years.iter().copied().max()?;
    let most_common: i32 = stable_mode(birth_years)?;

    Some(BirthYearSummary {
        earliest,
        latest,
        most_common,
    })
}
