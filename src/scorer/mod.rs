//! Hashtag scoring stages.
//!
//! Two independent scorers feed the merge stage:
//! - [`FrequencyScorer`]: word-frequency extraction over filtered tokens
//! - [`CategoryScorer`]: keyword/category matching against a fixed table
//!
//! Both are pure functions of their input text and the fixed tables they
//! carry; they share no state and can run in either order.

pub mod category;
pub mod frequency;
pub mod merge;

pub use category::{CategoryScorer, Category, CATEGORIES};
pub use frequency::FrequencyScorer;
pub use merge::merge;

use crate::types::Hashtag;

/// A scoring stage: text in, ranked hashtags out.
///
/// Implementations never fail; malformed or empty input yields an empty
/// vector.
pub trait Scorer {
    /// Score `text`, returning hashtags in descending confidence order.
    fn score(&self, text: &str) -> Vec<Hashtag>;
}

/// Stable sort by descending confidence. Equal-confidence entries keep their
/// relative order.
pub(crate) fn sort_by_confidence(tags: &mut [Hashtag]) {
    tags.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_confidence_is_descending_and_stable() {
        let mut tags = vec![
            Hashtag::new("#a", 0.5),
            Hashtag::new("#b", 0.9),
            Hashtag::new("#c", 0.5),
            Hashtag::new("#d", 0.1),
        ];
        sort_by_confidence(&mut tags);

        let order: Vec<&str> = tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(order, ["#b", "#a", "#c", "#d"]);
    }
}
