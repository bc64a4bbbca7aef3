// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bikeshare_domain::City;

/// Errors that can occur while loading a dataset or computing statistics.
///
/// Everything except `EmptyDataset` is a data-integrity failure: the backing
/// file is broken and the session cannot continue with it. `EmptyDataset`
/// marks the one computation that is mathematically undefined on an empty
/// restricted dataset (the mode), and is reported rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The city's backing data file could not be opened or read.
    SourceUnavailable {
        /// The city whose data was requested.
        city: City,
        /// The path that was tried.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
    /// A required column is missing from the data source.
    MissingColumn {
        /// The normalized column name.
        column: String,
    },
    /// A row could not be read, or a required field was empty.
    MalformedRow {
        /// The 1-based data row number (header excluded).
        row: usize,
        /// The underlying parse error message.
        message: String,
    },
    /// A row's start-time field could not be parsed as a timestamp.
    MalformedTimestamp {
        /// The 1-based data row number (header excluded).
        row: usize,
        /// The unparseable value.
        value: String,
        /// The underlying parse error message.
        message: String,
    },
    /// A row's trip-duration field was not numeric.
    MalformedDuration {
        /// The 1-based data row number (header excluded).
        row: usize,
        /// The unparseable value.
        value: String,
    },
    /// A row's birth-year field was not numeric.
    MalformedBirthYear {
        /// The 1-based data row number (header excluded).
        row: usize,
        /// The unparseable value.
        value: String,
    },
    /// A mode computation was requested over an empty restricted dataset.
    EmptyDataset {
        /// The computation that was requested.
        computation: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable {
                city,
                path,
                message,
            } => {
                write!(f, "Cannot read data for {city} from '{path}': {message}")
            }
            Self::MissingColumn { column } => {
                write!(f, "Data source is missing required column '{column}'")
            }
            Self::MalformedRow { row, message } => {
                write!(f, "Row {row} could not be read: {message}")
            }
            Self::MalformedTimestamp {
                row,
                value,
                message,
            } => {
                write!(
                    f,
                    "Row {row} has an unparseable start time '{value}': {message}"
                )
            }
            Self::MalformedDuration { row, value } => {
                write!(f, "Row {row} has a non-numeric trip duration '{value}'")
            }
            Self::MalformedBirthYear { row, value } => {
                write!(f, "Row {row} has a non-numeric birth year '{value}'")
            }
            Self::EmptyDataset { computation } => {
                write!(f, "No data for this selection: cannot compute {computation}")
            }
        }
    }
}

impl std::error::Error for CoreError {}
