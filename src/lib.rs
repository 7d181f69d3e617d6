// src/lib.rs
//! # wordscrub
//!
//! `wordscrub` detects and masks offensive words inside strings and inside
//! arbitrarily nested key-value structures. Given a configurable word list
//! it reports whether input is "dirty", extracts exactly which substrings
//! matched, and produces a masked copy of the input with matches obscured.
//!
//! The library is pure and stateless after construction: the word list is
//! resolved and compiled once, and every scan or clean call is an
//! independent function over in-memory data.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` and the `WordListProvider` seam for
//!   resolving word sources (embedded defaults, external file, or array).
//! * `words`: The nested word-source representation and its flattening.
//! * `matcher`: Compiles word lists into cached, case-insensitive,
//!   whole-word regular expressions and scans text with them.
//! * `masker`: The replacement policy (edge-preserving asterisk mask or
//!   literal replacement) and string cleaning.
//! * `walker`: Recursive traversal of `serde_json::Value` structures with
//!   dotted-path reporting and shape-preserving rewriting.
//! * `filter`: The `BadWordFilter` facade and one-shot helpers.
//! * `errors`: The `FilterError` type.
//!
//! ## Matching semantics
//!
//! Words match case-insensitively with Unicode-aware word-boundary
//! semantics: "ass" matches in `"what an ass!"` but never inside
//! `"ASSociative"`, and punctuation adjacent to a word neither blocks nor
//! joins the match. Scan results follow word-list order (not text order)
//! and collect one instance per configured word per scan.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordscrub::{BadWordFilter, FilterConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // A filter over the embedded default word list.
//!     let filter = BadWordFilter::with_defaults()?;
//!     assert!(filter.is_dirty("what a shit day"));
//!     assert_eq!(filter.clean("what a shit day"), "what a s**t day");
//!
//!     // A filter over a caller-supplied list, with extra words.
//!     let config = FilterConfig::from_words(["bogus"]).with_also_check("bad word");
//!     let filter = BadWordFilter::new(config)?;
//!     assert_eq!(filter.clean("<h3>bad word</h3>"), "<h3>b******d</h3>");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction is the only fallible stage: an unrecognized word source or
//! an unreadable word list file fails with [`FilterError`] variants wrapped
//! in `anyhow::Error`. Scanning and cleaning never fail on well-formed
//! input; non-string, non-container leaves are deliberately inert.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod filter;
pub mod masker;
pub mod matcher;
pub mod walker;
pub mod words;

/// Re-exports the public configuration types and the word-source seam.
pub use config::{
    load_default_words, load_words_from_file, AlsoCheck, ConfigWordListProvider, FilterConfig,
    WordListProvider, SOURCE_ARRAY, SOURCE_FILE,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the filter facade and one-shot helpers.
pub use filter::{scrub_once, scrub_value_once, BadWordFilter};

/// Re-exports the masking policy entry points.
pub use masker::{clean_string, replacement_for, DEFAULT_MASK};

/// Re-exports the compiled matcher types for advanced usage.
pub use matcher::{compile_words, get_or_compile_words, CompiledWord, CompiledWords, MAX_WORD_LENGTH};

/// Re-exports the structure traversal entry points.
pub use walker::{clean_value, find_dirty_paths, is_dirty_value};

/// Re-exports the word-source data model.
pub use words::{build_word_list, WordTree};
