//! masker.rs - Replacement policy and string cleaning.
//!
//! Given the substrings a scan matched, this module computes replacement
//! text (default edge-preserving asterisk mask, or a literal caller-supplied
//! replacement) and substitutes every occurrence of each matched substring
//! in the input.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use regex::{NoExpand, RegexBuilder};

use crate::matcher::CompiledWords;

/// The sentinel replacement selecting the default asterisk mask.
pub const DEFAULT_MASK: &str = "*";

/// Computes the replacement text for one matched substring.
///
/// When `replace_with` is the [`DEFAULT_MASK`] sentinel, the mask keeps the
/// first and last character and replaces the interior with asterisks; for
/// matches of three or fewer characters the result is the first character
/// followed by exactly two asterisks. Any other `replace_with` is used
/// literally as the entire replacement.
///
/// Lengths are measured in characters, not bytes.
pub fn replacement_for(matched: &str, replace_with: &str) -> String {
    if replace_with != DEFAULT_MASK {
        return replace_with.to_string();
    }

    let chars: Vec<char> = matched.chars().collect();
    let len = chars.len();
    let mut masked = String::with_capacity(matched.len());

    if let Some(first) = chars.first() {
        masked.push(*first);
    }
    if len > 3 {
        for _ in 0..len - 2 {
            masked.push('*');
        }
        masked.push(chars[len - 1]);
    } else {
        masked.push_str("**");
    }
    masked
}

/// Cleans a single string: scans it for configured words and replaces every
/// case-insensitive occurrence of each matched substring with its computed
/// replacement.
///
/// Substitution is sequential in scan order, so a later word's pass operates
/// on the already-partially-replaced string. Returns the input unchanged
/// when nothing matches.
pub fn clean_string(text: &str, words: &CompiledWords, replace_with: &str) -> String {
    let matched = words.scan(text);
    if matched.is_empty() {
        return text.to_string();
    }

    let mut cleaned = text.to_string();
    for matched_str in matched {
        if matched_str.is_empty() {
            continue;
        }

        let replacement = replacement_for(&matched_str, replace_with);
        // The matched text is escaped, so compilation can only fail on the
        // size limit; skip rather than corrupt the output in that case.
        match RegexBuilder::new(&regex::escape(&matched_str))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => {
                cleaned = re
                    .replace_all(&cleaned, NoExpand(replacement.as_str()))
                    .into_owned();
            }
            Err(e) => {
                warn!("Skipping replacement of matched text: {}", e);
            }
        }
    }
    cleaned
}
