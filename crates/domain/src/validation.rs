// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FilterCategory, ValidatedAnswer};

/// Validates one raw filter answer against a category's vocabulary.
///
/// The rules apply in order: the answer is trimmed; a literal `"all"`
/// (case-sensitive) on a non-city category means "no filter"; a blank
/// answer is rejected; an answer containing any numeric digit is rejected;
/// finally membership in `allowed_values` is checked case-insensitively.
///
/// City has no "no filter" path: `"all"` falls through to the membership
/// check and is rejected there, since it is not a city name.
///
/// This function is pure and deterministic. Re-prompting on error and
/// echoing the accepted value are the caller's concern.
///
/// # Arguments
///
/// * `category` - The filter dimension being answered
/// * `raw_answer` - The answer exactly as the user supplied it
/// * `allowed_values` - The lower-cased vocabulary for the category
///
/// # Returns
///
/// * `Ok(ValidatedAnswer::NoFilter)` for `"all"` on month or day
/// * `Ok(ValidatedAnswer::Value)` holding the lower-cased answer on success
/// * `Err(DomainError)` if the answer is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The trimmed answer is empty
/// - The trimmed answer contains a numeric digit
/// - The trimmed answer is not in the vocabulary
pub fn validate_answer(
    category: FilterCategory,
    raw_answer: &str,
    allowed_values: &[&str],
) -> Result<ValidatedAnswer, DomainError> {
    let trimmed: &str = raw_answer.trim();

    // Rule: "all" is a keyword, not a vocabulary value. Only month and day
    // may decline to filter.
    if category != FilterCategory::City && trimmed == "all" {
        return Ok(ValidatedAnswer::NoFilter);
    }

    // Rule: the answer must not be blank
    if trimmed.is_empty() {
        return Err(DomainError::BlankAnswer { category });
    }

    // Rule: category names are alphabetic; any digit anywhere is rejected
    if trimmed.chars().any(char::is_numeric) {
        return Err(DomainError::NonAlphabeticAnswer {
            category,
            answer: trimmed.to_string(),
        });
    }

    // Rule: membership is case-insensitive against the vocabulary
    if allowed_values
        .iter()
        .any(|value| value.eq_ignore_ascii_case(trimmed))
    {
        Ok(ValidatedAnswer::Value(trimmed.to_lowercase()))
    } else {
        Err(DomainError::UnknownValue {
            category,
            answer: trimmed.to_string(),
        })
    }
}
