// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stdin prompting with re-prompt on validation errors.

use crate::error::CliError;
use bikeshare_domain::{FilterCategory, FilterCriteria, ValidatedAnswer, validate_answer};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prints a prompt and reads one trimmed line from stdin.
fn read_line(prompt: &str) -> Result<String, CliError> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let stdin = std::io::stdin();
    read_trimmed_line(&mut stdin.lock())
}

/// Reads one trimmed line from any buffered reader.
///
/// Exhausted input (a zero-byte read) is an I/O failure, not a blank
/// answer: a blank answer would send the prompt loop spinning forever on a
/// closed stdin.
fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String, CliError> {
    let mut buffer: String = String::new();
    let bytes_read: usize = reader.read_line(&mut buffer)?;
    if bytes_read == 0 {
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }
    Ok(buffer.trim().to_string())
}

/// Prompts for one filter category until the answer validates.
///
/// Validation errors are echoed and the prompt repeats; only I/O failures
/// escape.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn prompt_category(category: FilterCategory) -> Result<ValidatedAnswer, CliError> {
    loop {
        let raw: String = read_line(&format!("Please input your desired {category}: "))?;

        match validate_answer(category, &raw, category.allowed_values()) {
            Ok(ValidatedAnswer::NoFilter) => {
                println!("No filter applied for {category}");
                return Ok(ValidatedAnswer::NoFilter);
            }
            Ok(ValidatedAnswer::Value(value)) => {
                println!("Good! You have selected {}", value.to_uppercase());
                return Ok(ValidatedAnswer::Value(value));
            }
            Err(e) => {
                debug!(category = %category, error = %e, "Rejected filter answer");
                println!("oops!!!... {e}");
            }
        }
    }
}

/// Asks the user for a city, month, and day and assembles the criteria.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails, or if the validated answers
/// do not assemble into criteria.
pub fn gather_criteria() -> Result<FilterCriteria, CliError> {
    println!("Hello! Let's explore some US bikeshare data!");
    println!("We have data for the following cities: Chicago || New York || Washington");

    let city: ValidatedAnswer = prompt_category(FilterCategory::City)?;
    let month: ValidatedAnswer = prompt_category(FilterCategory::Month)?;
    let day: ValidatedAnswer = prompt_category(FilterCategory::Day)?;
    println!("{}", "-".repeat(40));

    Ok(FilterCriteria::from_answers(&city, &month, &day)?)
}

/// Asks a yes/no question; only a (case-insensitive) "yes" is a yes.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn confirm(question: &str) -> Result<bool, CliError> {
    let answer: String = read_line(question)?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}

/// Asks whether to show the next sample page; "y" continues.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn confirm_next_page() -> Result<bool, CliError> {
    let answer: String = read_line("Enter Y to continue: ")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
