//! matcher.rs - Manages the compilation and caching of word match patterns.
//!
//! This module turns a flat word list into `CompiledWords`, a set of
//! case-insensitive, Unicode-aware, word-boundary regexes optimized for
//! repeated scanning. It uses a global, shared cache to avoid redundant
//! compilation when several filter instances share a word list.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::RegexBuilder;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::errors::FilterError;

/// Maximum allowed length for a single configured word.
pub const MAX_WORD_LENGTH: usize = 200;

/// Represents a single compiled word pattern.
#[derive(Debug)]
pub struct CompiledWord {
    /// The configured word, as listed.
    pub word: String,
    /// The compiled whole-word, case-insensitive regular expression.
    pub regex: regex::Regex,
}

/// Represents the full compiled word list for efficient scanning.
#[derive(Debug)]
pub struct CompiledWords {
    /// Compiled patterns in word-list order.
    pub words: Vec<CompiledWord>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled word lists.
    /// The key is an order-sensitive hash of the word sequence.
    static ref COMPILED_WORDS_CACHE: RwLock<HashMap<u64, Arc<CompiledWords>>> =
        RwLock::new(HashMap::new());
}

/// Hashes a word list to create a stable cache key. Order matters: scan
/// results are reported in word-list order, so differently ordered lists
/// are distinct cache entries.
fn hash_words(words: &[String]) -> u64 {
    let mut hasher = DefaultHasher::new();
    words.hash(&mut hasher);
    hasher.finish()
}

/// Builds the search pattern for a single word.
///
/// The word is matched literally (escaped), case-insensitively, and only as
/// a whole word: a boundary assertion is added on each side whose edge
/// character is alphanumeric, so "ass" never matches inside "ASSociative"
/// while punctuation adjacent to the word neither blocks nor joins a match.
fn word_pattern(word: &str) -> String {
    let mut pattern = String::new();
    if word.chars().next().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern.push('(');
    pattern.push_str(&regex::escape(word));
    pattern.push(')');
    if word.chars().last().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Compiles a word list into `CompiledWords` for efficient matching.
/// This is the low-level function that performs the actual regex compilation.
///
/// Empty or whitespace-only words are skipped (they can contribute no
/// match), as are words exceeding [`MAX_WORD_LENGTH`].
pub fn compile_words(words_to_compile: &[String]) -> Result<CompiledWords, FilterError> {
    debug!("Starting compilation of {} words.", words_to_compile.len());

    let mut compiled = Vec::with_capacity(words_to_compile.len());

    for word in words_to_compile {
        let word = word.trim();
        if word.is_empty() {
            warn!("Skipping empty or whitespace-only word.");
            continue;
        }
        if word.len() > MAX_WORD_LENGTH {
            warn!(
                "Skipping word of length {} (maximum is {}).",
                word.len(),
                MAX_WORD_LENGTH
            );
            continue;
        }

        let regex = RegexBuilder::new(&word_pattern(word))
            .case_insensitive(true)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build()
            .map_err(|e| FilterError::WordCompilation(word.to_string(), e))?;

        compiled.push(CompiledWord {
            word: word.to_string(),
            regex,
        });
    }

    debug!("Finished compiling words. Total compiled: {}.", compiled.len());
    Ok(CompiledWords { words: compiled })
}

/// Gets a `CompiledWords` instance from the cache or compiles it if not
/// found.
///
/// This is the public entry point for retrieving compiled words. It returns
/// an `Arc` to a `CompiledWords` instance, allowing for cheap sharing.
pub fn get_or_compile_words(words: &[String]) -> Result<Arc<CompiledWords>, FilterError> {
    let cache_key = hash_words(words);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_WORDS_CACHE.read().unwrap();
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled words from cache for key: {}", &cache_key);
            return Ok(Arc::clone(compiled));
        }
    } // Read lock is released here.

    debug!("Compiled words not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_words(words)?);

    COMPILED_WORDS_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached words for key: {}", &cache_key);
    Ok(compiled_arc)
}

impl CompiledWords {
    /// Scans `text` for configured words and returns the matched substrings,
    /// case-preserved as they appear in `text`.
    ///
    /// Result order follows word-list order, not text order, and only the
    /// first occurrence of each word is collected per scan. Both behaviors
    /// are part of the public contract.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut matched = Vec::new();
        for compiled in &self.words {
            if let Some(m) = compiled.regex.find(text) {
                matched.push(m.as_str().to_string());
            }
        }
        matched
    }

    /// Returns true iff `text` contains at least one configured word.
    /// Short-circuits on the first match.
    pub fn contains_match(&self, text: &str) -> bool {
        self.words.iter().any(|c| c.regex.is_match(text))
    }

    /// Number of usable (compiled) words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
