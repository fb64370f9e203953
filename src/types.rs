//! Core value types: the [`Hashtag`] record and the pipeline configuration.

use serde::{Deserialize, Serialize};

/// A suggested hashtag with its heuristic relevance score.
///
/// The `tag` always starts with `#` and is lowercase with no internal
/// whitespace. `confidence` is a heuristic in `[0, 1]`, not a calibrated
/// probability. Hashtags are immutable once produced; two hashtags refer to
/// the same tag when their `tag` strings compare equal case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    /// The `#`-prefixed tag text.
    pub tag: String,
    /// Heuristic relevance score in `[0, 1]`.
    pub confidence: f64,
}

impl Hashtag {
    /// Create a hashtag from an already-prefixed tag string.
    pub fn new(tag: impl Into<String>, confidence: f64) -> Self {
        Self {
            tag: tag.into(),
            confidence,
        }
    }

    /// Create a hashtag by prefixing `#` to a bare term.
    pub fn from_term(term: &str, confidence: f64) -> Self {
        Self {
            tag: format!("#{term}"),
            confidence,
        }
    }

    /// Case-insensitive dedup key for this hashtag.
    pub fn key(&self) -> String {
        self.tag.to_lowercase()
    }
}

/// Configuration for the hashtag suggestion pipeline.
///
/// Defaults reproduce the reference behavior: top 12 frequency terms capped
/// at 0.9 confidence, top 8 category tags with keyword tags at a flat 0.7,
/// and a merged result of at most 15 hashtags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Stopword list language (e.g., "en").
    pub language: String,
    /// Minimum token length (in chars) kept by the frequency scorer.
    pub min_token_len: usize,
    /// Maximum number of hashtags emitted by the frequency scorer.
    pub max_frequency_tags: usize,
    /// Upper bound on frequency-derived confidence.
    pub frequency_confidence_cap: f64,
    /// Flat confidence assigned to matched-keyword hashtags.
    pub keyword_confidence: f64,
    /// Number of matched keywords per category emitted as their own tags.
    pub keywords_per_category: usize,
    /// Maximum number of hashtags emitted by the category scorer.
    pub max_category_tags: usize,
    /// Maximum number of hashtags in the merged result.
    pub max_results: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            min_token_len: 4,
            max_frequency_tags: 12,
            frequency_confidence_cap: 0.9,
            keyword_confidence: 0.7,
            keywords_per_category: 2,
            max_category_tags: 8,
            max_results: 15,
        }
    }
}

impl SuggestConfig {
    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the minimum token length kept by the frequency scorer.
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Set the maximum number of merged results.
    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Set the maximum number of frequency-derived hashtags.
    pub fn with_max_frequency_tags(mut self, n: usize) -> Self {
        self.max_frequency_tags = n;
        self
    }

    /// Set the maximum number of category-derived hashtags.
    pub fn with_max_category_tags(mut self, n: usize) -> Self {
        self.max_category_tags = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_term_prefixes_hash() {
        let tag = Hashtag::from_term("rust", 0.5);
        assert_eq!(tag.tag, "#rust");
        assert_eq!(tag.confidence, 0.5);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let a = Hashtag::new("#Rust", 0.5);
        let b = Hashtag::new("#rust", 0.3);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_default_config_literals() {
        let cfg = SuggestConfig::default();
        assert_eq!(cfg.max_frequency_tags, 12);
        assert_eq!(cfg.max_category_tags, 8);
        assert_eq!(cfg.max_results, 15);
        assert_eq!(cfg.keyword_confidence, 0.7);
        assert_eq!(cfg.frequency_confidence_cap, 0.9);
        assert_eq!(cfg.keywords_per_category, 2);
    }

    #[test]
    fn test_builder_methods() {
        let cfg = SuggestConfig::default()
            .with_language("de")
            .with_max_results(5);
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.max_results, 5);
    }

    #[test]
    fn test_hashtag_serde_roundtrip() {
        let tag = Hashtag::from_term("technology", 0.9);
        let json = serde_json::to_string(&tag).unwrap();
        let back: Hashtag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
