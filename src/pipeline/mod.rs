//! Suggestion pipeline: runs both scorers and merges their output.
//!
//! The two scorers are independent pure functions; they share no state and
//! their relative order does not matter. The optional embedding probe is
//! fired before scoring and its handle dropped, so its outcome can never
//! block or alter the result.

use crate::probe::EmbeddingProbe;
use crate::scorer::{merge, CategoryScorer, FrequencyScorer};
use crate::types::{Hashtag, SuggestConfig};

/// The hashtag suggestion pipeline.
///
/// Holds both scoring stages and the shared configuration. Construction
/// builds the stopword filter once; `suggest` is then allocation-light and
/// safe to call repeatedly and from multiple threads.
#[derive(Debug, Clone)]
pub struct HashtagPipeline {
    config: SuggestConfig,
    frequency: FrequencyScorer,
    category: CategoryScorer,
    probe: Option<EmbeddingProbe>,
}

impl Default for HashtagPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl HashtagPipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SuggestConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: SuggestConfig) -> Self {
        let frequency = FrequencyScorer::with_config(config.clone());
        let category = CategoryScorer::with_config(config.clone());
        Self {
            config,
            frequency,
            category,
            probe: None,
        }
    }

    /// Attach a best-effort embedding probe. Its outcome is discarded; see
    /// [`crate::probe`].
    pub fn with_probe(mut self, probe: EmbeddingProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Suggest hashtags for `text`.
    ///
    /// Returns at most `max_results` hashtags, descending by confidence,
    /// with no case-insensitive duplicate tags. Frequency-derived tags win
    /// over category-derived duplicates. Empty or unusable input yields an
    /// empty vector; this never fails.
    pub fn suggest(&self, text: &str) -> Vec<Hashtag> {
        if let Some(probe) = &self.probe {
            // Attempted exactly once, never read, never retried.
            drop(probe.fire(text));
        }

        let frequency_tags = self.frequency.score(text);
        let category_tags = self.category.score(text);
        merge(&frequency_tags, &category_tags, self.config.max_results)
    }
}

/// Suggest hashtags for `text` with the default pipeline.
pub fn suggest_hashtags(text: &str) -> Vec<Hashtag> {
    HashtagPipeline::new().suggest(text)
}
