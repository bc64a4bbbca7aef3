// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// The fixed city vocabulary, lower-cased.
pub const CITIES: &[&str] = &["chicago", "new york", "washington"];

/// The fixed month vocabulary, lower-cased.
///
/// The datasets only cover the first half of the year, so the filter
/// vocabulary stops at June even though derived month names may not.
pub const MONTHS: &[&str] = &["january", "february", "march", "april", "may", "june"];

/// The fixed day-of-week vocabulary, lower-cased.
pub const DAYS: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// One of the three filter dimensions a user answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterCategory {
    /// The city whose dataset is analyzed. Mandatory; never "no filter".
    City,
    /// The month restriction.
    Month,
    /// The day-of-week restriction.
    Day,
}

impl FilterCategory {
    /// Returns the category name as it appears in prompts and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Month => "month",
            Self::Day => "day",
        }
    }

    /// Returns the allowed vocabulary for this category.
    #[must_use]
    pub const fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            Self::City => CITIES,
            Self::Month => MONTHS,
            Self::Day => DAYS,
        }
    }
}

impl std::fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of validating one raw filter answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidatedAnswer {
    /// The user declined to restrict on this dimension ("all").
    NoFilter,
    /// An accepted, lower-cased vocabulary value.
    Value(String),
}

/// A supported city and its backing data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    /// Chicago, IL.
    Chicago,
    /// New York City, NY.
    #[serde(rename = "new york")]
    NewYork,
    /// Washington, DC.
    Washington,
}

impl City {
    /// Parses a city from its vocabulary name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownValue` if the name is not one of the
    /// three supported cities.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "chicago" => Ok(Self::Chicago),
            "new york" => Ok(Self::NewYork),
            "washington" => Ok(Self::Washington),
            _ => Err(DomainError::UnknownValue {
                category: FilterCategory::City,
                answer: s.to_string(),
            }),
        }
    }

    /// Returns the lower-cased vocabulary name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYork => "new york",
            Self::Washington => "washington",
        }
    }

    /// Returns the CSV file backing this city's dataset.
    ///
    /// The mapping is fixed and one-to-one.
    #[must_use]
    pub const fn data_file(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYork => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A month restriction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
}

impl Month {
    /// Parses a month from its vocabulary name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownValue` if the name is not a month in the
    /// filter vocabulary (January through June).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "january" => Ok(Self::January),
            "february" => Ok(Self::February),
            "march" => Ok(Self::March),
            "april" => Ok(Self::April),
            "may" => Ok(Self::May),
            "june" => Ok(Self::June),
            _ => Err(DomainError::UnknownValue {
                category: FilterCategory::Month,
                answer: s.to_string(),
            }),
        }
    }

    /// Returns the lower-cased vocabulary name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
        }
    }

    /// Returns the title-cased month name, as derived month names are stored.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A day-of-week restriction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Day {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Day {
    /// Parses a day from its vocabulary name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownValue` if the name is not a day of the
    /// week.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(DomainError::UnknownValue {
                category: FilterCategory::Day,
                answer: s.to_string(),
            }),
        }
    }

    /// Returns the lower-cased vocabulary name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Returns the title-cased day name, as derived weekday names are stored.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The validated filter selection for one analysis session.
///
/// A session always pins exactly one city; month and day are optional
/// restrictions where `None` means "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// The city whose dataset is analyzed.
    city: City,
    /// The month restriction, if any.
    month: Option<Month>,
    /// The day-of-week restriction, if any.
    day: Option<Day>,
}

impl FilterCriteria {
    /// Creates new `FilterCriteria`.
    #[must_use]
    pub const fn new(city: City, month: Option<Month>, day: Option<Day>) -> Self {
        Self { city, month, day }
    }

    /// Builds criteria from the three validated prompt answers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The city answer is `NoFilter` (a city must always be pinned)
    /// - Any accepted answer does not parse as its vocabulary type
    pub fn from_answers(
        city: &ValidatedAnswer,
        month: &ValidatedAnswer,
        day: &ValidatedAnswer,
    ) -> Result<Self, DomainError> {
        let city: City = match city {
            ValidatedAnswer::NoFilter => return Err(DomainError::MissingCityFilter),
            ValidatedAnswer::Value(value) => City::parse(value)?,
        };

        let month: Option<Month> = match month {
            ValidatedAnswer::NoFilter => None,
            ValidatedAnswer::Value(value) => Some(Month::parse(value)?),
        };

        let day: Option<Day> = match day {
            ValidatedAnswer::NoFilter => None,
            ValidatedAnswer::Value(value) => Some(Day::parse(value)?),
        };

        Ok(Self { city, month, day })
    }

    /// Returns the selected city.
    #[must_use]
    pub const fn city(&self) -> City {
        self.city
    }

    /// Returns the month restriction, if any.
    #[must_use]
    pub const fn month(&self) -> Option<Month> {
        self.month
    }

    /// Returns the day-of-week restriction, if any.
    #[must_use]
    pub const fn day(&self) -> Option<Day> {
        self.day
    }
}

/// One trip from a city's record set.
///
/// Records are immutable after construction. The month name, weekday name,
/// and start hour are derived from the start time exactly once, at load
/// time, and never supplied or mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// When the trip started.
    start_time: NaiveDateTime,
    /// Trip length in seconds.
    trip_duration: f64,
    /// The station the trip started from.
    start_station: String,
    /// The station the trip ended at.
    end_station: String,
    /// The rider's subscription classification.
    user_type: String,
    /// The rider's gender, where the dataset records it.
    gender: Option<String>,
    /// The rider's birth year, where the dataset records it.
    birth_year: Option<i32>,
    /// Derived: title-cased month name of the start time.
    month_name: String,
    /// Derived: title-cased weekday name of the start time.
    weekday_name: String,
    /// Derived: start hour, 0-23.
    start_hour: u32,
}

impl TripRecord {
    /// Creates a new `TripRecord`, computing the derived time fields.
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let month_name: String = month_name_of(&start_time);
        let weekday_name: String = weekday_name_of(&start_time);
        let start_hour: u32 = start_time.hour();
        Self {
            start_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month_name,
            weekday_name,
            start_hour,
        }
    }

    /// Returns when the trip started.
    #[must_use]
    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Returns the trip length in seconds.
    #[must_use]
    pub const fn trip_duration(&self) -> f64 {
        self.trip_duration
    }

    /// Returns the start station name.
    #[must_use]
    pub fn start_station(&self) -> &str {
        &self.start_station
    }

    /// Returns the end station name.
    #[must_use]
    pub fn end_station(&self) -> &str {
        &self.end_station
    }

    /// Returns the rider's subscription classification.
    #[must_use]
    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    /// Returns the rider's gender, if recorded.
    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    /// Returns the rider's birth year, if recorded.
    #[must_use]
    pub const fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// Returns the derived title-cased month name.
    #[must_use]
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Returns the derived title-cased weekday name.
    #[must_use]
    pub fn weekday_name(&self) -> &str {
        &self.weekday_name
    }

    /// Returns the derived start hour (0-23).
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }
}

/// Title-cased English month name of a timestamp.
fn month_name_of(timestamp: &NaiveDateTime) -> String {
    const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTH_NAMES
        .get(timestamp.month0() as usize)
        .copied()
        .unwrap_or_default()
        .to_string()
}

/// Title-cased English weekday name of a timestamp.
fn weekday_name_of(timestamp: &NaiveDateTime) -> String {
    let name: &str = match timestamp.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    };
    name.to_string()
}
