//! filter.rs - The public filter facade.
//!
//! `BadWordFilter` ties the configuration layer, the compiled matcher, the
//! masker, and the structure walker together behind the small API callers
//! actually use: is it dirty, which words, which keys, and give me a clean
//! copy. One-shot convenience functions are provided for callers that do
//! not want to hold a filter instance.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

use crate::config::{AlsoCheck, ConfigWordListProvider, FilterConfig, WordListProvider};
use crate::masker::{self, DEFAULT_MASK};
use crate::matcher::{self, CompiledWords};
use crate::walker;
use crate::words;

/// A configured profanity filter.
///
/// The word list is resolved and compiled once at construction and is
/// immutable thereafter, so a filter can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct BadWordFilter {
    compiled: Arc<CompiledWords>,
}

impl BadWordFilter {
    /// Builds a filter from a configuration. All word-source failures
    /// (unrecognized source type, unreadable word file) surface here.
    pub fn new(config: FilterConfig) -> Result<Self> {
        let also_check = config.also_check.clone();
        let provider = ConfigWordListProvider::new(config);
        Self::from_provider(&provider, also_check)
    }

    /// Builds a filter from an arbitrary word-list provider plus
    /// `also_check` additions.
    pub fn from_provider(provider: &dyn WordListProvider, also_check: AlsoCheck) -> Result<Self> {
        let provided = provider.resolve()?;
        let word_list = words::build_word_list(provided, &also_check.to_vec());
        let compiled = matcher::get_or_compile_words(&word_list)
            .context("Failed to compile word list for BadWordFilter")?;
        Ok(Self { compiled })
    }

    /// Builds a filter over the embedded default word list.
    pub fn with_defaults() -> Result<Self> {
        Self::new(FilterConfig::default())
    }

    /// True iff `text` contains at least one configured word.
    pub fn is_dirty(&self, text: &str) -> bool {
        self.compiled.contains_match(text)
    }

    /// True iff the structure contains at least one dirty string leaf.
    /// A bare string value routes to the string-level check.
    pub fn is_dirty_value(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.is_dirty(s),
            other => walker::is_dirty_value(other, &self.compiled),
        }
    }

    /// The matched substrings in `text`, case-preserved, in word-list
    /// order, one instance per configured word.
    pub fn dirty_words(&self, text: &str) -> Vec<String> {
        self.compiled.scan(text)
    }

    /// The dotted paths of every dirty string leaf in the structure.
    pub fn dirty_keys(&self, value: &Value) -> Vec<String> {
        walker::find_dirty_paths(value, &self.compiled)
    }

    /// Cleans `text` with the default asterisk mask.
    pub fn scrub(&self, text: &str) -> String {
        self.scrub_with(text, DEFAULT_MASK)
    }

    /// Cleans `text`, replacing matches per `replace_with` (the `"*"`
    /// sentinel selects the edge-preserving mask; anything else is used
    /// literally).
    pub fn scrub_with(&self, text: &str, replace_with: &str) -> String {
        masker::clean_string(text, &self.compiled, replace_with)
    }

    /// Cleans a structure with the default asterisk mask.
    pub fn scrub_value(&self, value: &Value) -> Value {
        self.scrub_value_with(value, DEFAULT_MASK)
    }

    /// Cleans a structure, rewriting only dirty string leaves. A bare
    /// string value routes to the string-level cleaner.
    pub fn scrub_value_with(&self, value: &Value, replace_with: &str) -> Value {
        match value {
            Value::String(s) => Value::String(self.scrub_with(s, replace_with)),
            other => walker::clean_value(other, &self.compiled, replace_with),
        }
    }

    /// Alias for [`scrub`](Self::scrub).
    pub fn clean(&self, text: &str) -> String {
        self.scrub(text)
    }

    /// Alias for [`scrub_with`](Self::scrub_with).
    pub fn clean_with(&self, text: &str, replace_with: &str) -> String {
        self.scrub_with(text, replace_with)
    }

    /// Alias for [`scrub_value`](Self::scrub_value).
    pub fn clean_value(&self, value: &Value) -> Value {
        self.scrub_value(value)
    }
}

/// One-shot scrub of a string: build a filter from `config`, clean, discard.
pub fn scrub_once(config: FilterConfig, text: &str) -> Result<String> {
    let filter = BadWordFilter::new(config)?;
    Ok(filter.scrub(text))
}

/// One-shot scrub of a structure.
pub fn scrub_value_once(config: FilterConfig, value: &Value) -> Result<Value> {
    let filter = BadWordFilter::new(config)?;
    Ok(filter.scrub_value(value))
}
