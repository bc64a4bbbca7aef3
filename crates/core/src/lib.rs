// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod browse;
mod error;
mod loader;
mod stats;

#[cfg(test)]
mod tests;

pub use browse::{DEFAULT_PAGE_SIZE, Pages, paginate};
pub use error::CoreError;
pub use loader::{DatasetLoader, read_records, restrict};
pub use stats::{
    BirthYearSummary, DurationStats, StationStats, TimeStats, UserStats, duration_stats,
    station_stats, time_stats, user_stats,
};
