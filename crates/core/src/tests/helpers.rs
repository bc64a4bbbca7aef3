// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bikeshare_domain::TripRecord;
use chrono::NaiveDateTime;

/// A small Chicago-style export with the optional demographic columns.
///
/// 2017-03-03 and 2017-06-23 are Fridays; 2017-03-04 is a Saturday;
/// 2017-01-01 is a Sunday.
pub const CSV_WITH_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 00:00:36,2017-01-01 00:06:32,356,Canal St,Clark St,Customer,,
1,2017-03-03 09:10:00,2017-03-03 09:15:00,300,Clark St,State St,Subscriber,Male,1992.0
2,2017-03-03 18:20:00,2017-03-03 18:40:00,1200,State St,Clark St,Subscriber,Female,1984.0
3,2017-03-04 09:30:00,2017-03-04 09:45:00,900,Clark St,Canal St,Customer,Male,1992.0
4,2017-06-23 15:09:32,2017-06-23 15:30:00,1228,Canal St,State St,Subscriber,Female,1968.0
";

/// A Washington-style export: no Gender, no Birth Year.
pub const CSV_WITHOUT_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-03 09:10:00,2017-03-03 09:15:00,300,Jefferson Dr,14th St,Subscriber
1,2017-03-04 10:00:00,2017-03-04 10:20:00,1200,14th St,Jefferson Dr,Customer
";

pub fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

/// Builds a record with uninteresting demographic fields.
pub fn record(start: &str, duration: f64, start_station: &str, end_station: &str) -> TripRecord {
    TripRecord::new(
        timestamp(start),
        duration,
        start_station.to_string(),
        end_station.to_string(),
        String::from("Subscriber"),
        None,
        None,
    )
}

/// Builds a record with explicit demographic fields.
pub fn record_with_demographics(
    start: &str,
    user_type: &str,
    gender: Option<&str>,
    birth_year: Option<i32>,
) -> TripRecord {
    TripRecord::new(
        timestamp(start),
        300.0,
        String::from("Clark St"),
        String::from("State St"),
        user_type.to_string(),
        gender.map(ToString::to_string),
        birth_year,
    )
}
