// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{record, record_with_demographics};
use crate::{
    BirthYearSummary, CoreError, DurationStats, StationStats, TimeStats, UserStats,
    duration_stats, station_stats, time_stats, user_stats,
};
use bikeshare_domain::TripRecord;

#[test]
fn test_time_stats_picks_most_frequent_values() {
    let records: Vec<TripRecord> = vec![
        record("2017-03-03 09:00:00", 300.0, "A", "B"),
        record("2017-03-10 09:30:00", 300.0, "A", "B"),
        record("2017-06-23 15:00:00", 300.0, "A", "B"),
    ];

    let stats: TimeStats = time_stats(&records).expect("non-empty dataset");

    assert_eq!(stats.common_month, "March");
    assert_eq!(stats.common_weekday, "Friday");
    assert_eq!(stats.common_start_hour, 9);
}

#[test]
fn test_time_stats_tie_break_is_first_seen() {
    // One June record and one March record: June was seen first.
    let records: Vec<TripRecord> = vec![
        record("2017-06-23 15:00:00", 300.0, "A", "B"),
        record("2017-03-03 09:00:00", 300.0, "A", "B"),
    ];

    let stats: TimeStats = time_stats(&records).expect("non-empty dataset");

    assert_eq!(stats.common_month, "June");
    assert_eq!(stats.common_start_hour, 15);
}

#[test]
fn test_time_stats_on_empty_dataset_is_an_error() {
    let result = time_stats(&[]);
    assert_eq!(
        result,
        Err(CoreError::EmptyDataset {
            computation: "time statistics",
        })
    );
}

#[test]
fn test_duration_stats_totals_and_averages() {
    let records: Vec<TripRecord> = vec![
        record("2017-03-03 09:00:00", 10.0, "A", "B"),
        record("2017-03-03 10:00:00", 20.0, "A", "B"),
        record("2017-03-03 11:00:00", 30.0, "A", "B"),
    ];

    let stats: DurationStats = duration_stats(&records);

    assert!((stats.total_seconds - 60.0).abs() < f64::EPSILON);
    assert_eq!(stats.mean_seconds, Some(20.0));
}

#[test]
fn test_duration_stats_on_empty_dataset() {
    let stats: DurationStats = duration_stats(&[]);
    assert!((stats.total_seconds - 0.0).abs() < f64::EPSILON);
    assert_eq!(stats.mean_seconds, None);
}

#[test]
fn test_station_stats_stable_mode_tie_break() {
    // "A" and "B" both appear twice; "A" was seen first.
    let stations: [&str; 5] = ["A", "B", "A", "C", "B"];
    let records: Vec<TripRecord> = stations
        .iter()
        .map(|s| record("2017-03-03 09:00:00", 300.0, s, "X"))
        .collect();

    let stats: StationStats = station_stats(&records).expect("non-empty dataset");

    assert_eq!(stats.popular_start, "A");
    assert_eq!(stats.popular_end, "X");
}

#[test]
fn test_station_stats_start_and_end_are_independent() {
    let records: Vec<TripRecord> = vec![
        record("2017-03-03 09:00:00", 300.0, "A", "Y"),
        record("2017-03-03 10:00:00", 300.0, "A", "X"),
        record("2017-03-03 11:00:00", 300.0, "B", "X"),
    ];

    let stats: StationStats = station_stats(&records).expect("non-empty dataset");

    assert_eq!(stats.popular_start, "A");
    assert_eq!(stats.popular_end, "X");
}

#[test]
fn test_station_stats_on_empty_dataset_is_an_error() {
    let result = station_stats(&[]);
    assert_eq!(
        result,
        Err(CoreError::EmptyDataset {
            computation: "station statistics",
        })
    );
}

#[test]
fn test_user_type_counts_are_ordered_by_descending_count() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Customer", None, None),
        record_with_demographics("2017-03-03 10:00:00", "Subscriber", None, None),
        record_with_demographics("2017-03-03 11:00:00", "Subscriber", None, None),
    ];

    let stats: UserStats = user_stats(&records);

    assert_eq!(
        stats.user_type_counts,
        vec![
            (String::from("Subscriber"), 2),
            (String::from("Customer"), 1),
        ]
    );
}

#[test]
fn test_user_type_count_ties_keep_first_seen_order() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Customer", None, None),
        record_with_demographics("2017-03-03 10:00:00", "Subscriber", None, None),
        record_with_demographics("2017-03-03 11:00:00", "Dependent", None, None),
    ];

    let stats: UserStats = user_stats(&records);

    assert_eq!(
        stats.user_type_counts,
        vec![
            (String::from("Customer"), 1),
            (String::from("Subscriber"), 1),
            (String::from("Dependent"), 1),
        ]
    );
}

#[test]
fn test_gender_counts_unavailable_when_column_absent() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Subscriber", None, None),
        record_with_demographics("2017-03-03 10:00:00", "Customer", None, None),
    ];

    let stats: UserStats = user_stats(&records);

    assert_eq!(stats.gender_counts, None);
}

#[test]
fn test_gender_counts_sum_to_record_count_when_fully_populated() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Subscriber", Some("Male"), None),
        record_with_demographics("2017-03-03 10:00:00", "Subscriber", Some("Female"), None),
        record_with_demographics("2017-03-03 11:00:00", "Customer", Some("Female"), None),
    ];

    let stats: UserStats = user_stats(&records);

    let counts: Vec<(String, u64)> = stats.gender_counts.expect("gender is populated");
    let total: u64 = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 3);
    assert_eq!(counts[0], (String::from("Female"), 2));
}

#[test]
fn test_gender_counts_cover_only_present_values() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Subscriber", Some("Male"), None),
        record_with_demographics("2017-03-03 10:00:00", "Customer", None, None),
    ];

    let stats: UserStats = user_stats(&records);

    assert_eq!(
        stats.gender_counts,
        Some(vec![(String::from("Male"), 1)])
    );
}

#[test]
fn test_birth_year_summary() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Subscriber", None, Some(1992)),
        record_with_demographics("2017-03-03 10:00:00", "Subscriber", None, Some(1968)),
        record_with_demographics("2017-03-03 11:00:00", "Customer", None, Some(1992)),
    ];

    let stats: UserStats = user_stats(&records);

    assert_eq!(
        stats.birth_year_summary,
        Some(BirthYearSummary {
            earliest: 1968,
            latest: 1992,
            most_common: 1992,
        })
    );
}

#[test]
fn test_birth_year_summary_unavailable_when_column_absent() {
    let records: Vec<TripRecord> = vec![record_with_demographics(
        "2017-03-03 09:00:00",
        "Subscriber",
        None,
        None,
    )];

    let stats: UserStats = user_stats(&records);

    assert_eq!(stats.birth_year_summary, None);
}

#[test]
fn test_birth_year_mode_tie_break_is_first_seen() {
    let records: Vec<TripRecord> = vec![
        record_with_demographics("2017-03-03 09:00:00", "Subscriber", None, Some(1984)),
        record_with_demographics("2017-03-03 10:00:00", "Subscriber", None, Some(1992)),
    ];

    let stats: UserStats = user_stats(&records);

    let summary: BirthYearSummary = stats.birth_year_summary.expect("years are present");
    assert_eq!(summary.most_common, 1984);
}

#[test]
fn test_report_structs_serialize_for_json_output() {
    let stats: DurationStats = duration_stats(&[]);

    let rendered: serde_json::Value = serde_json::to_value(&stats).expect("serializable report");

    assert_eq!(rendered["total_seconds"], 0.0);
    assert_eq!(rendered["mean_seconds"], serde_json::Value::Null);
}

#[test]
fn test_user_stats_on_empty_dataset_is_degenerate_not_an_error() {
    let stats: UserStats = user_stats(&[]);

    assert!(stats.user_type_counts.is_empty());
    assert_eq!(stats.gender_counts, None);
    assert_eq!(stats.birth_year_summary, None);
}
