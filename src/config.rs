//! Configuration management for `wordscrub`.
//!
//! This module defines the word-source configuration consumed at filter
//! construction and the `WordListProvider` seam that decouples the matching
//! core from word-list acquisition. It handles deserialization of YAML
//! configurations and provides utilities for loading word lists from the
//! embedded defaults, an external file, or a caller-supplied array.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::FilterError;
use crate::words::WordTree;

/// The `source` value selecting the embedded-or-file word list path.
pub const SOURCE_FILE: &str = "file";
/// The `source` value selecting the caller-supplied `bad_words_array`.
pub const SOURCE_ARRAY: &str = "array";

/// Extra words to check in addition to the configured source. Accepts a
/// single word or a sequence of words in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AlsoCheck {
    One(String),
    Many(Vec<String>),
}

impl Default for AlsoCheck {
    fn default() -> Self {
        AlsoCheck::Many(Vec::new())
    }
}

impl AlsoCheck {
    /// Normalizes to a word sequence regardless of scalar/sequence form.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            AlsoCheck::One(word) => vec![word.clone()],
            AlsoCheck::Many(words) => words.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AlsoCheck::One(word) => word.is_empty(),
            AlsoCheck::Many(words) => words.is_empty(),
        }
    }
}

impl From<&str> for AlsoCheck {
    fn from(word: &str) -> Self {
        AlsoCheck::One(word.to_string())
    }
}

impl From<Vec<String>> for AlsoCheck {
    fn from(words: Vec<String>) -> Self {
        AlsoCheck::Many(words)
    }
}

impl From<Vec<&str>> for AlsoCheck {
    fn from(words: Vec<&str>) -> Self {
        AlsoCheck::Many(words.into_iter().map(str::to_string).collect())
    }
}

/// Represents the top-level configuration structure for a filter instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Word source selector: `"file"` or `"array"`. Any other value is a
    /// configuration error at construction time.
    pub source: String,
    /// Path to an external YAML word list. When `source` is `"file"` and
    /// this is unset, the embedded default list is used.
    pub source_file: Option<PathBuf>,
    /// Caller-supplied word list, used when `source` is `"array"`.
    pub bad_words_array: Vec<String>,
    /// Extra words appended to whatever the source resolves to.
    pub also_check: AlsoCheck,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            source: SOURCE_FILE.to_string(),
            source_file: None,
            bad_words_array: Vec::new(),
            also_check: AlsoCheck::default(),
        }
    }
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Convenience constructor for an array-sourced configuration.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: SOURCE_ARRAY.to_string(),
            bad_words_array: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builder-style setter for the `also_check` additions.
    pub fn with_also_check<A: Into<AlsoCheck>>(mut self, also_check: A) -> Self {
        self.also_check = also_check.into();
        self
    }
}

/// A capability that resolves the configured word source into the flat word
/// collection the filter will match against.
///
/// This trait decouples the matching core from any file-system or packaging
/// concern; the core depends only on the resolved word collection.
pub trait WordListProvider {
    /// Resolves the word source. Fails with a configuration error when the
    /// source type is unrecognized or a file-based source is unavailable.
    fn resolve(&self) -> Result<Vec<String>>;
}

/// The standard provider, resolving words according to a [`FilterConfig`].
#[derive(Debug, Clone)]
pub struct ConfigWordListProvider {
    config: FilterConfig,
}

impl ConfigWordListProvider {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }
}

impl WordListProvider for ConfigWordListProvider {
    fn resolve(&self) -> Result<Vec<String>> {
        match self.config.source.as_str() {
            SOURCE_FILE => match &self.config.source_file {
                Some(path) => load_words_from_file(path),
                None => load_default_words(),
            },
            SOURCE_ARRAY => {
                debug!(
                    "Using caller-supplied word array ({} words).",
                    self.config.bad_words_array.len()
                );
                Ok(self.config.bad_words_array.clone())
            }
            other => Err(FilterError::InvalidSource(other.to_string()).into()),
        }
    }
}

/// Loads and flattens the embedded default word list.
pub fn load_default_words() -> Result<Vec<String>> {
    debug!("Loading default word list from embedded string...");
    let default_yaml = include_str!("../config/default_words.yaml");
    let tree: WordTree =
        serde_yml::from_str(default_yaml).context("Failed to parse default word list")?;
    let words = tree.flatten();
    debug!("Loaded {} default words.", words.len());
    Ok(words)
}

/// Loads and flattens a word list from an external YAML file.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Loading custom word list from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|_| FilterError::SourceFileUnavailable(path.display().to_string()))?;
    let tree: WordTree = serde_yml::from_str(&text)
        .map_err(|_| FilterError::SourceFileUnavailable(path.display().to_string()))?;
    let words = tree.flatten();
    info!("Loaded {} words from file {}.", words.len(), path.display());
    Ok(words)
}
