// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised while deriving scales and chords.

use thiserror::Error;

/// Caller-input errors. Derivation either succeeds completely or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The tonic matches no spelling in the chromatic table
    #[error("note not found: {0:?}")]
    NoteNotFound(String),
    /// The mode is not one of the seven mode names
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
}
