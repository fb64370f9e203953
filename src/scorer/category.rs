//! Category-based hashtag scoring.
//!
//! Matches the input text against a fixed table of category → keyword
//! associations. Matching is plain lowercase substring containment, not
//! token-boundary aware: the keyword "ai" matches inside "aiming". That
//! over-match is part of the observable behavior and is kept as-is.

use crate::scorer::{sort_by_confidence, Scorer};
use crate::types::{Hashtag, SuggestConfig};

/// A topical category with its curated keyword list.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Category name, emitted as a hashtag when any keyword matches.
    pub name: &'static str,
    /// Keywords checked by substring containment, in match-priority order.
    pub keywords: &'static [&'static str],
}

/// The fixed category table, constant for the process lifetime.
///
/// Categories are checked in definition order; keyword order decides which
/// matches are promoted to their own hashtags.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "technology",
        keywords: &[
            "ai",
            "tech",
            "software",
            "coding",
            "digital",
            "innovation",
            "programming",
            "computer",
            "technology",
        ],
    },
    Category {
        name: "business",
        keywords: &[
            "business",
            "startup",
            "entrepreneur",
            "marketing",
            "finance",
            "money",
            "growth",
            "success",
        ],
    },
    Category {
        name: "lifestyle",
        keywords: &[
            "lifestyle",
            "balance",
            "mindfulness",
            "motivation",
            "inspiration",
            "selfcare",
            "happiness",
        ],
    },
    Category {
        name: "fitness",
        keywords: &[
            "fitness",
            "workout",
            "gym",
            "exercise",
            "training",
            "muscle",
            "cardio",
            "health",
        ],
    },
    Category {
        name: "travel",
        keywords: &[
            "travel",
            "vacation",
            "adventure",
            "explore",
            "wanderlust",
            "destination",
            "journey",
            "tourism",
        ],
    },
    Category {
        name: "food",
        keywords: &[
            "food",
            "recipe",
            "cooking",
            "delicious",
            "restaurant",
            "baking",
            "foodie",
            "cuisine",
            "flavor",
        ],
    },
    Category {
        name: "education",
        keywords: &[
            "education",
            "learning",
            "study",
            "school",
            "university",
            "teaching",
            "knowledge",
            "student",
        ],
    },
    Category {
        name: "creativity",
        keywords: &[
            "art",
            "design",
            "creative",
            "music",
            "photography",
            "writing",
            "painting",
            "craft",
        ],
    },
];

/// Category-table hashtag scorer.
#[derive(Debug, Clone)]
pub struct CategoryScorer {
    config: SuggestConfig,
    table: &'static [Category],
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer {
    /// Create a scorer over [`CATEGORIES`] with the default config.
    pub fn new() -> Self {
        Self::with_config(SuggestConfig::default())
    }

    /// Create a scorer with a custom config.
    pub fn with_config(config: SuggestConfig) -> Self {
        Self {
            config,
            table: CATEGORIES,
        }
    }

    /// Replace the category table.
    pub fn with_table(mut self, table: &'static [Category]) -> Self {
        self.table = table;
        self
    }

    /// Score `text` against the category table.
    ///
    /// For each category with at least one matching keyword, emits the
    /// category as a hashtag with confidence `matched / total_keywords`, plus
    /// the first `keywords_per_category` matched keywords as hashtags at the
    /// flat keyword confidence. The combined list is sorted descending by
    /// confidence and truncated to `max_category_tags`.
    pub fn score(&self, text: &str) -> Vec<Hashtag> {
        let lower = text.to_lowercase();
        let mut tags = Vec::new();

        for category in self.table {
            let matches: Vec<&str> = category
                .keywords
                .iter()
                .copied()
                .filter(|kw| lower.contains(kw))
                .collect();
            if matches.is_empty() {
                continue;
            }

            let ratio = matches.len() as f64 / category.keywords.len() as f64;
            tags.push(Hashtag::from_term(category.name, ratio));

            for keyword in matches.iter().take(self.config.keywords_per_category) {
                tags.push(Hashtag::from_term(keyword, self.config.keyword_confidence));
            }
        }

        sort_by_confidence(&mut tags);
        tags.truncate(self.config.max_category_tags);
        tags
    }
}

impl Scorer for CategoryScorer {
    fn score(&self, text: &str) -> Vec<Hashtag> {
        CategoryScorer::score(self, text)
    }
}
