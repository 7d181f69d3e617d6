//! Word list data model for `wordscrub`.
//!
//! Word lists may arrive flat (a plain sequence) or grouped by category
//! (a mapping of category name to further lists), and the grouping may nest
//! arbitrarily. This module defines the `WordTree` source representation and
//! the depth-first flattening that turns any shape into the single ordered
//! word sequence the matcher consumes.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A possibly-nested word list source.
///
/// Deserializes from YAML where a node is either a bare word, a sequence of
/// nodes, or a mapping of category name to node. Category keys carry no
/// meaning for matching; they exist only to keep hand-maintained word files
/// organized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WordTree {
    /// A terminal word (may contain spaces, i.e. a multi-token phrase).
    Word(String),
    /// An ordered list of nested sources.
    List(Vec<WordTree>),
    /// Category-grouped nested sources. Iteration is in key order, which
    /// keeps flattening deterministic.
    Groups(BTreeMap<String, WordTree>),
}

impl WordTree {
    /// Flattens the tree into a single ordered word sequence, visiting
    /// depth-first. List order is preserved; group branches are visited in
    /// key order.
    pub fn flatten(&self) -> Vec<String> {
        let mut words = Vec::new();
        self.flatten_into(&mut words);
        words
    }

    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            WordTree::Word(word) => out.push(word.clone()),
            WordTree::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            WordTree::Groups(groups) => {
                for tree in groups.values() {
                    tree.flatten_into(out);
                }
            }
        }
    }
}

/// Builds the final word collection for a filter instance: the provider's
/// resolved words followed by any `also_check` additions.
///
/// No deduplication is performed; a word listed twice simply matches twice
/// as cheaply as once.
pub fn build_word_list(provided: Vec<String>, also_check: &[String]) -> Vec<String> {
    let mut words = provided;
    words.extend(also_check.iter().cloned());
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_list_order() {
        let tree = WordTree::List(vec![
            WordTree::Word("first".to_string()),
            WordTree::Word("second".to_string()),
            WordTree::List(vec![WordTree::Word("third".to_string())]),
        ]);
        assert_eq!(tree.flatten(), vec!["first", "second", "third"]);
    }

    #[test]
    fn flatten_visits_groups_depth_first() {
        let yaml = r#"
alpha:
  - one
  - two
beta:
  inner:
    - three
"#;
        let tree: WordTree = serde_yml::from_str(yaml).unwrap();
        assert_eq!(tree.flatten(), vec!["one", "two", "three"]);
    }

    #[test]
    fn bare_word_flattens_to_itself() {
        let tree = WordTree::Word("solo".to_string());
        assert_eq!(tree.flatten(), vec!["solo"]);
    }

    #[test]
    fn build_word_list_appends_also_check() {
        let words = build_word_list(
            vec!["one".to_string()],
            &["two".to_string(), "three".to_string()],
        );
        assert_eq!(words, vec!["one", "two", "three"]);
    }
}
