//! Graph sources: anything that can populate a [`DefinitionGraph`].
//!
//! The engine itself never reads files. A [`GraphSource`] is handed an empty
//! graph and calls [`DefinitionGraph::add_vertex`] /
//! [`DefinitionGraph::add_edge`] for every word it knows. Because
//! construction empties the graph it runs on, every pass asks the source to
//! populate a fresh one.
//!
//! [`Dictionary`] is the source for already-cleaned dictionary data: a JSON
//! object mapping each headword to the list of words in its definition,
//!
//! ```json
//! { "apple": ["fruit", "red", "round"], "fruit": ["seed", "plant"] }
//! ```
//!
//! Edges run from each definition word to its headword.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::DefinitionGraph;

/// Populates a definition graph.
pub trait GraphSource {
    /// Adds every vertex and edge this source describes to `graph`.
    fn populate(&self, graph: &mut DefinitionGraph);
}

impl<F> GraphSource for F
where
    F: Fn(&mut DefinitionGraph),
{
    fn populate(&self, graph: &mut DefinitionGraph) {
        self(graph);
    }
}

/// Errors raised while parsing dictionary or key-list JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The input is not valid JSON of the expected shape.
    InvalidJson {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Parser message.
        detail: String,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson {
                line,
                column,
                detail,
            } => write!(f, "invalid JSON at line {line}, column {column}: {detail}"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<serde_json::Error> for DictionaryError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

/// Headword → definition words, ordered by headword.
///
/// Ordering makes population, and therefore the greedy construction,
/// deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    definitions: BTreeMap<String, Vec<String>>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the cleaned `{"word": ["w1", ...]}` format.
    ///
    /// Entries with an empty headword are dropped.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidJson`] if `json` is not an object of string
    /// arrays.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let mut dict: Self = serde_json::from_str(json)?;
        dict.definitions.remove("");
        Ok(dict)
    }

    /// Adds or replaces the definition of `word`. Empty headwords are
    /// ignored.
    pub fn insert(&mut self, word: impl Into<String>, definition: Vec<String>) {
        let word = word.into();
        if !word.is_empty() {
            self.definitions.insert(word, definition);
        }
    }

    /// Definition words of `word`, if it is a headword.
    pub fn definition(&self, word: &str) -> Option<&[String]> {
        self.definitions.get(word).map(Vec::as_slice)
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if there are no headwords.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Headwords in order.
    pub fn headwords(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions.keys().map(String::as_str)
    }
}

impl GraphSource for Dictionary {
    /// Adds every headword and every definition word as a vertex, then one
    /// edge per (definition word → headword) pair. A headword that mentions
    /// itself gets no edge.
    fn populate(&self, graph: &mut DefinitionGraph) {
        for (word, definition) in &self.definitions {
            graph.add_vertex(word);
            for token in definition {
                graph.add_vertex(token);
            }
        }
        for (word, definition) in &self.definitions {
            for token in definition {
                if token != word {
                    graph.add_edge(token, word);
                }
            }
        }
    }
}

/// Parses a JSON array of keys, the persisted form of free-word lists and
/// removal sets.
///
/// # Errors
///
/// [`DictionaryError::InvalidJson`] if `json` is not an array of strings.
pub fn parse_key_list(json: &str) -> Result<Vec<String>, DictionaryError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn from_json_parses_cleaned_format() {
        let d = Dictionary::from_json(r#"{"apple": ["fruit", "red"], "fruit": ["plant"]}"#)
            .expect("valid dictionary");
        assert_eq!(d.len(), 2);
        assert_eq!(
            d.definition("apple"),
            Some(["fruit".to_owned(), "red".to_owned()].as_slice())
        );
        assert_eq!(d.headwords().collect::<Vec<_>>(), vec!["apple", "fruit"]);
    }

    #[test]
    fn from_json_drops_empty_headword() {
        let d = Dictionary::from_json(r#"{"": ["x"], "a": []}"#).expect("valid dictionary");
        assert_eq!(d.len(), 1);
        assert!(d.definition("").is_none());
    }

    #[test]
    fn from_json_rejects_non_string_words() {
        let err = Dictionary::from_json(r#"{"a": [1, 2]}"#).expect_err("numbers are rejected");
        let DictionaryError::InvalidJson { line, .. } = err;
        assert_eq!(line, 1);
    }

    #[test]
    fn populate_adds_edges_from_definition_words_to_headword() {
        let d = Dictionary::from_json(r#"{"apple": ["fruit", "apple"], "fruit": ["apple"]}"#)
            .expect("valid dictionary");
        let mut g = DefinitionGraph::new();
        d.populate(&mut g);
        assert_eq!(g.size(), 2);
        assert!(g.has_edge("fruit", "apple"));
        assert!(g.has_edge("apple", "fruit"));
        assert!(!g.has_edge("apple", "apple"));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn populate_adds_words_without_definitions() {
        let d = Dictionary::from_json(r#"{"big": ["large", "size"]}"#).expect("valid dictionary");
        let mut g = DefinitionGraph::new();
        d.populate(&mut g);
        assert_eq!(g.size(), 3);
        let mut free = g.free_words();
        free.sort();
        assert_eq!(free, vec!["large".to_owned(), "size".to_owned()]);
    }

    #[test]
    fn closures_are_graph_sources() {
        let source = |g: &mut DefinitionGraph| {
            g.add_vertex("a");
            g.add_vertex("b");
            g.add_edge("a", "b");
        };
        let mut g = DefinitionGraph::new();
        source.populate(&mut g);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parse_key_list_round_trip() {
        let keys = parse_key_list(r#"["a", "b"]"#).expect("valid list");
        assert_eq!(keys, vec!["a".to_owned(), "b".to_owned()]);
        assert!(parse_key_list(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn error_display_mentions_position() {
        let err = parse_key_list("[\"a\",").expect_err("truncated");
        let msg = err.to_string();
        assert!(msg.contains("line 1"), "message: {msg}");
    }
}
