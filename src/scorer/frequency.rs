//! Word-frequency hashtag scoring.
//!
//! Tokenizes the text, drops short tokens and stopwords, counts what remains,
//! and turns the most frequent terms into hashtags. Confidence is the term's
//! share of the surviving tokens, doubled and capped.

use rustc_hash::FxHashMap;

use crate::nlp::{tokenize, StopwordFilter};
use crate::scorer::Scorer;
use crate::types::{Hashtag, SuggestConfig};

/// Frequency-based hashtag scorer.
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    config: SuggestConfig,
    stopwords: StopwordFilter,
}

impl Default for FrequencyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyScorer {
    /// Create a scorer with the default config and English stopwords.
    pub fn new() -> Self {
        Self::with_config(SuggestConfig::default())
    }

    /// Create a scorer with a custom config. The stopword list follows
    /// `config.language`.
    pub fn with_config(config: SuggestConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self { config, stopwords }
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Score `text` by term frequency.
    ///
    /// Terms rank by descending count; equal-count terms keep their
    /// first-encounter order in the text. Confidence is
    /// `min(count / surviving_tokens * 2, cap)`. If no token survives
    /// filtering the result is empty.
    pub fn score(&self, text: &str) -> Vec<Hashtag> {
        let kept: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| {
                t.chars().count() >= self.config.min_token_len && !self.stopwords.is_stopword(t)
            })
            .collect();

        let total = kept.len();
        if total == 0 {
            return Vec::new();
        }

        // Count occurrences, remembering first-encounter order for ties.
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut order: Vec<&str> = Vec::new();
        for token in &kept {
            let count = counts.entry(token.as_str()).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|t| (t, counts[t])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.config.max_frequency_tags);

        // Confidence is monotone in count, so the count ordering already is
        // the confidence ordering.
        ranked
            .into_iter()
            .map(|(term, count)| {
                let confidence = (count as f64 / total as f64 * 2.0)
                    .min(self.config.frequency_confidence_cap);
                Hashtag::from_term(term, confidence)
            })
            .collect()
    }
}

impl Scorer for FrequencyScorer {
    fn score(&self, text: &str) -> Vec<Hashtag> {
        FrequencyScorer::score(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let scorer = FrequencyScorer::new();
        assert!(scorer.score("").is_empty());
        assert!(scorer.score("   \n\t  ").is_empty());
    }

    #[test]
    fn test_all_tokens_filtered_out() {
        // Short tokens and stopwords only; surviving count is zero and the
        // division guard must kick in.
        let scorer = FrequencyScorer::new();
        assert!(scorer.score("the and a of to it is").is_empty());
        assert!(scorer.score("ab cd efg").is_empty());
    }

    #[test]
    fn test_higher_count_ranks_first() {
        let scorer = FrequencyScorer::new();
        let tags = scorer.score("technology technology technology innovation");

        assert_eq!(tags[0].tag, "#technology");
        assert_eq!(tags[1].tag, "#innovation");
        assert!(tags[0].confidence > tags[1].confidence);
    }

    #[test]
    fn test_confidence_formula_and_cap() {
        let scorer = FrequencyScorer::new();
        // 3 of 4 surviving tokens: 3/4 * 2 = 1.5, capped at 0.9.
        let tags = scorer.score("technology technology technology innovation");
        assert_eq!(tags[0].confidence, 0.9);
        // 1 of 4: 1/4 * 2 = 0.5.
        assert_eq!(tags[1].confidence, 0.5);
    }

    #[test]
    fn test_at_most_twelve_tags_with_bounded_confidence() {
        let scorer = FrequencyScorer::new();
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india \
                    juliet kilo lima mike november oscar papa quebec romeo";
        let tags = scorer.score(text);

        assert!(tags.len() <= 12);
        for tag in &tags {
            assert!(tag.confidence > 0.0 && tag.confidence <= 0.9);
            assert!(tag.tag.starts_with('#'));
        }
    }

    #[test]
    fn test_equal_counts_keep_encounter_order() {
        let scorer = FrequencyScorer::new();
        let tags = scorer.score("zebra apple mango");

        let order: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(order, ["#zebra", "#apple", "#mango"]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_excluded() {
        let scorer = FrequencyScorer::new();
        let tags = scorer.score("the quick brown fox and the lazy dog");

        assert!(tags.iter().all(|t| t.tag != "#the" && t.tag != "#and"));
        // "fox" and "dog" are length 3 and must be dropped too.
        assert!(tags.iter().all(|t| t.tag != "#fox" && t.tag != "#dog"));
        assert!(tags.iter().any(|t| t.tag == "#quick"));
    }

    #[test]
    fn test_custom_stopword_filter() {
        let scorer = FrequencyScorer::new()
            .with_stopwords(StopwordFilter::from_list(&["quick", "brown"]));
        let tags = scorer.score("quick brown jumper");

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "#jumper");
    }

    #[test]
    fn test_deterministic() {
        let scorer = FrequencyScorer::new();
        let text = "rust makes systems programming approachable and reliable";
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
