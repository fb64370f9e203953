//! Merge stage: combine, dedupe, rank, truncate.

use rustc_hash::FxHashSet;

use crate::scorer::sort_by_confidence;
use crate::types::Hashtag;

/// Merge two scored hashtag lists into one ranked result.
///
/// Concatenates `a` then `b`, drops case-insensitive duplicate tags keeping
/// the first occurrence in concatenation order (so an `a` entry always beats
/// its `b` duplicate), stable-sorts descending by confidence, and truncates
/// to `limit`.
pub fn merge(a: &[Hashtag], b: &[Hashtag], limit: usize) -> Vec<Hashtag> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut merged: Vec<Hashtag> = Vec::with_capacity(a.len() + b.len());

    for tag in a.iter().chain(b) {
        if seen.insert(tag.key()) {
            merged.push(tag.clone());
        }
    }

    sort_by_confidence(&mut merged);
    merged.truncate(limit);
    merged
}
