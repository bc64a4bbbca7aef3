// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::FilterCategory;

/// Errors that can occur while validating filter answers.
///
/// These are recoverable: the caller re-prompts and tries again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The answer was empty after trimming.
    BlankAnswer {
        /// The category being answered.
        category: FilterCategory,
    },
    /// The answer contained a numeric digit.
    NonAlphabeticAnswer {
        /// The category being answered.
        category: FilterCategory,
        /// The rejected answer.
        answer: String,
    },
    /// The answer is not in the category's vocabulary.
    UnknownValue {
        /// The category being answered.
        category: FilterCategory,
        /// The rejected answer.
        answer: String,
    },
    /// A city answer resolved to "no filter", which is never allowed.
    MissingCityFilter,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankAnswer { category } => {
                write!(f, "{category} cannot be blank")
            }
            Self::NonAlphabeticAnswer { category, answer } => {
                write!(f, "{category} name must be alphabetic only, got '{answer}'")
            }
            Self::UnknownValue { category, answer } => {
                write!(f, "'{answer}' is not a valid {category} in our database")
            }
            Self::MissingCityFilter => {
                write!(f, "a city must always be selected; 'all' is not a city")
            }
        }
    }
}

impl std::error::Error for DomainError {}
