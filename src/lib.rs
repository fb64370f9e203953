//! hashrank — heuristic hashtag suggestion.
//!
//! Proposes hashtags for free-form text using two overlapping heuristics:
//! word-frequency extraction and keyword/category matching. Their outputs are
//! merged, deduplicated case-insensitively, ranked by confidence, and capped.
//! The whole pipeline is pure and deterministic; an optional best-effort
//! embedding probe can be attached but never influences the result.
//!
//! # Example
//!
//! ```
//! use hashrank::suggest_hashtags;
//!
//! let tags = suggest_hashtags("technology technology technology innovation");
//!
//! assert_eq!(tags[0].tag, "#technology");
//! assert!(tags.len() <= 15);
//! assert!(tags.iter().all(|t| t.confidence <= 1.0));
//!
//! // Empty input degrades to an empty result, never an error.
//! assert!(suggest_hashtags("").is_empty());
//! ```
//!
//! For custom limits or stopword languages, build a
//! [`HashtagPipeline`] from a [`SuggestConfig`]:
//!
//! ```
//! use hashrank::{HashtagPipeline, SuggestConfig};
//!
//! let pipeline = HashtagPipeline::with_config(
//!     SuggestConfig::default().with_max_results(5),
//! );
//! assert!(pipeline.suggest("travel adventure wanderlust").len() <= 5);
//! ```

pub mod nlp;
pub mod pipeline;
pub mod probe;
pub mod scorer;
pub mod types;

pub use pipeline::{suggest_hashtags, HashtagPipeline};
pub use probe::{EmbedError, EmbeddingModel, EmbeddingProbe};
pub use scorer::{CategoryScorer, FrequencyScorer, Scorer};
pub use types::{Hashtag, SuggestConfig};
