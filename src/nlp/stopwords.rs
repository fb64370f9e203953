//! Stopword filtering backed by the `stop-words` crate.
//!
//! The default English list is the fixed stopword set used by the frequency
//! scorer; custom lists are supported for hosts that want domain-specific
//! filtering. Words are stored and matched lowercase, since the tokenizer
//! lowercases everything before filtering.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of common words excluded from frequency analysis.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language.
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Create an empty filter (no words filtered).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check whether `word` is a stopword. Matching is case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
