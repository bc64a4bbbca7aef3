// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bikeshare::CoreError;
use bikeshare_domain::DomainError;
use thiserror::Error;

/// Top-level errors surfaced by the interactive session.
///
/// Validation errors never reach this type: the prompt loop consumes them
/// and re-prompts. Everything here ends the session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The validated answers did not assemble into criteria.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The dataset could not be loaded.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The JSON report document could not be rendered.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
