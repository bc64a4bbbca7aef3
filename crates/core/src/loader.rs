// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dataset loading and restriction.
//!
//! Loading resolves a city to its backing CSV, parses each row into a
//! [`TripRecord`] with its derived time fields, and then restricts the
//! sequence by the session's month/day criteria. Any malformed row is a
//! data-integrity error; restriction never drops malformed data silently.

use crate::error::CoreError;
use bikeshare_domain::{City, FilterCriteria, TripRecord};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// The timestamp layout used by every city export.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Required CSV column headers (normalized).
const REQUIRED_COLUMNS: &[&str] = &[
    "start_time",
    "trip_duration",
    "start_station",
    "end_station",
    "user_type",
];

/// Optional CSV column headers (normalized). Washington's export carries
/// neither of these.
const GENDER_COLUMN: &str = "gender";
const BIRTH_YEAR_COLUMN: &str = "birth_year";

/// Loads city trip data from a directory of per-city CSV exports.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    /// The directory holding the per-city CSV files.
    data_dir: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads the selected city's records and restricts them by the criteria.
    ///
    /// The restriction is conjunctive (month AND day) and order-preserving.
    /// It is also non-destructive: the full dataset is recovered by calling
    /// `load` again with unrestricted criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The city's data file cannot be opened or read
    /// - A required column is missing
    /// - Any row has a malformed timestamp, duration, or birth year, or an
    ///   empty required field
    pub fn load(&self, criteria: &FilterCriteria) -> Result<Vec<TripRecord>, CoreError> {
        let city: City = criteria.city();
        let path: PathBuf = self.data_dir.join(city.data_file());
        debug!(city = %city, path = %path.display(), "Opening city data file");

        let file: File = File::open(&path).map_err(|e| CoreError::SourceUnavailable {
            city,
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let records: Vec<TripRecord> = read_records(file)?;
        info!(
            city = %city,
            total = records.len(),
            "Loaded city dataset"
        );

        let restricted: Vec<TripRecord> = restrict(records, criteria);
        info!(
            city = %city,
            month = ?criteria.month(),
            day = ?criteria.day(),
            remaining = restricted.len(),
            "Applied month/day restriction"
        );
        Ok(restricted)
    }
}

/// Normalizes a CSV header for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Builds the normalized header map and checks the required columns.
fn resolve_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, CoreError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    for required in REQUIRED_COLUMNS {
        if !header_map.contains_key(*required) {
            return Err(CoreError::MissingColumn {
                column: String::from(*required),
            });
        }
    }

    Ok(header_map)
}

/// Parses one CSV row into a `TripRecord`.
fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row: usize,
) -> Result<TripRecord, CoreError> {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    // Required fields must carry a value; a blank cell is a broken row, not
    // an empty station name that could win a popularity count.
    let require_field = |name: &str| -> Result<String, CoreError> {
        get_field(name).ok_or_else(|| CoreError::MalformedRow {
            row,
            message: format!("required field '{name}' is empty"),
        })
    };

    let start_time_str: String = require_field("start_time")?;
    let start_time: NaiveDateTime =
        NaiveDateTime::parse_from_str(&start_time_str, START_TIME_FORMAT).map_err(|e| {
            CoreError::MalformedTimestamp {
                row,
                value: start_time_str.clone(),
                message: e.to_string(),
            }
        })?;

    let duration_str: String = require_field("trip_duration")?;
    let trip_duration: f64 =
        duration_str
            .parse::<f64>()
            .map_err(|_| CoreError::MalformedDuration {
                row,
                value: duration_str.clone(),
            })?;

    // Birth years arrive with a fractional representation ("1992.0") in some
    // exports; the value truncates toward the integer. A non-numeric value is
    // a data-integrity error, never "unavailable".
    #[allow(clippy::cast_possible_truncation)]
    let birth_year: Option<i32> = match get_field(BIRTH_YEAR_COLUMN) {
        Some(value) => Some(
            value
                .parse::<f64>()
                .map_err(|_| CoreError::MalformedBirthYear {
                    row,
                    value: value.clone(),
                })? as i32,
        ),
        None => None,
    };

    Ok(TripRecord::new(
        start_time,
        trip_duration,
        require_field("start_station")?,
        require_field("end_station")?,
        require_field("user_type")?,
        get_field(GENDER_COLUMN),
        birth_year,
    ))
}

/// Reads the full record set from any row-oriented CSV source.
///
/// Columns beyond the required/optional set are ignored. Row numbers in
/// errors are 1-based and exclude the header.
///
/// # Errors
///
/// Returns an error if a required column is missing or any row is malformed.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TripRecord>, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: StringRecord = csv_reader
        .headers()
        .map_err(|e| CoreError::MalformedRow {
            row: 0,
            message: format!("failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = resolve_headers(&headers)?;

    let mut records: Vec<TripRecord> = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row: usize = idx + 1;
        let record: StringRecord = result.map_err(|e| CoreError::MalformedRow {
            row,
            message: e.to_string(),
        })?;
        records.push(parse_row(&record, &header_map, row)?);
    }

    Ok(records)
}

/// Restricts a record set by the criteria's month/day predicates.
///
/// The predicates are conjunctive and the source order is preserved.
/// Criteria with no month and no day restriction return the input unchanged.
#[must_use]
pub fn restrict(mut records: Vec<TripRecord>, criteria: &FilterCriteria) -> Vec<TripRecord> {
    if let Some(month) = criteria.month() {
        records.retain(|r| r.month_name().eq_ignore_ascii_case(month.title()));
    }

    if let Some(day) = criteria.day() {
        records.retain(|r| r.weekday_name().eq_ignore_ascii_case(day.title()));
    }

    records
}
