//! errors.rs - Custom error types for the wordscrub library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordscrub` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Failed to compile match pattern for word '{0}': {1}")]
    WordCompilation(String, regex::Error),

    #[error("Word list source '{0}' is not a valid type. Valid types are: file, array")]
    InvalidSource(String),

    #[error("Source was 'file' but the word list file was not set or contained an invalid path. Tried looking for it at: {0}")]
    SourceFileUnavailable(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
