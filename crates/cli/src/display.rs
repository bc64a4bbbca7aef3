// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report and sample-page formatting.
//!
//! The core hands over structured reports; everything about how they look
//! on a terminal lives here.

use crate::error::CliError;
use bikeshare::{
    DurationStats, StationStats, TimeStats, UserStats, duration_stats, station_stats, time_stats,
    user_stats,
};
use bikeshare_domain::{FilterCriteria, TripRecord};
use std::time::Instant;

const SEPARATOR_WIDTH: usize = 40;

fn separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Reminds the user which filters this session is running under.
pub fn show_selection(criteria: &FilterCriteria) {
    println!(
        "\nI am showing data for the city of {}...",
        criteria.city()
    );

    match criteria.month() {
        Some(month) => println!("I am showing data for the month of {}...", month.title()),
        None => println!("I am showing data for all available months..."),
    }

    match criteria.day() {
        Some(day) => println!("I am showing data for {}s...", day.title()),
        None => println!("I am showing data for all days of the week..."),
    }

    separator();
}

fn show_time_stats(records: &[TripRecord]) {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let started: Instant = Instant::now();

    match time_stats(records) {
        Ok(stats) => {
            println!("The most common month of travel is {}", stats.common_month);
            println!(
                "The most common day of week of travel is {}",
                stats.common_weekday
            );
            println!(
                "The most common start hour for travel is {}",
                stats.common_start_hour
            );
        }
        Err(e) => println!("{e}"),
    }

    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    separator();
}

fn show_duration_stats(records: &[TripRecord]) {
    println!("\nCalculating Trip Duration...\n");
    let started: Instant = Instant::now();

    let stats: DurationStats = duration_stats(records);
    println!(
        "The total time travelled is {} seconds",
        stats.total_seconds
    );
    match stats.mean_seconds {
        Some(mean) => println!("The mean travel time is {mean} seconds"),
        None => println!("No data for this selection: the mean travel time is undefined"),
    }

    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    separator();
}

fn show_station_stats(records: &[TripRecord]) {
    println!("\nCalculating station statistics...\n");
    let started: Instant = Instant::now();

    match station_stats(records) {
        Ok(stats) => {
            println!("Popular Start Station => {}", stats.popular_start);
            println!("Popular End Station => {}", stats.popular_end);
        }
        Err(e) => println!("{e}"),
    }

    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    separator();
}

fn show_user_stats(records: &[TripRecord]) {
    println!("\nCalculating User Stats...\n");
    let started: Instant = Instant::now();

    let stats: UserStats = user_stats(records);

    println!("The user types are as follows:");
    for (user_type, count) in &stats.user_type_counts {
        println!("{user_type} => {count}");
    }

    match &stats.gender_counts {
        Some(counts) => {
            println!("\nThe gender counts are as follows:");
            for (gender, count) in counts {
                println!("{gender} => {count}");
            }
        }
        None => println!("\nData for gender is NOT available!"),
    }

    match stats.birth_year_summary {
        Some(summary) => println!(
            "\nThe earliest birth year is {}. The most recent birth year is {}. \
             The common year of birth is {}.",
            summary.earliest, summary.latest, summary.most_common
        ),
        None => println!("\nData for birth year is NOT available!"),
    }

    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    separator();
}

/// Prints all four statistic reports as formatted text.
pub fn show_reports(records: &[TripRecord]) {
    show_time_stats(records);
    show_station_stats(records);
    show_duration_stats(records);
    show_user_stats(records);
}

/// Prints all four statistic reports as one JSON document.
///
/// Mode computations over an empty selection render as `null`.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn show_reports_json(records: &[TripRecord]) -> Result<(), CliError> {
    let time: Option<TimeStats> = time_stats(records).ok();
    let stations: Option<StationStats> = station_stats(records).ok();
    let duration: DurationStats = duration_stats(records);
    let users: UserStats = user_stats(records);

    let document = serde_json::json!({
        "record_count": records.len(),
        "time_stats": time,
        "station_stats": stations,
        "duration_stats": duration,
        "user_stats": users,
    });

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Prints one page of raw sample records.
pub fn show_page(page: &[TripRecord]) {
    for record in page {
        let gender: &str = record.gender().unwrap_or("-");
        let birth_year: String = record
            .birth_year()
            .map_or_else(|| String::from("-"), |year| year.to_string());
        println!(
            "{} | {:>7.0}s | {} -> {} | {} | {} | {}",
            record.start_time(),
            record.trip_duration(),
            record.start_station(),
            record.end_station(),
            record.user_type(),
            gender,
            birth_year,
        );
    }
}
