//! Overlap similarity between token sequences
//!
//! The Jaccard index over the two sequences' token sets. Duplicates and order
//! inside a sequence do not matter.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Jaccard similarity of two sequences.
///
/// Returns 0.0 when both sequences are empty; otherwise
/// `|set(a) ∩ set(b)| / |set(a) ∪ set(b)|`, which is symmetric and bounded
/// in `[0, 1]`.
pub fn calculate_similarity<T: Eq + Hash>(sequence: &[T], other: &[T]) -> f64 {
    if sequence.is_empty() && other.is_empty() {
        return 0.0;
    }

    let a: FxHashSet<&T> = sequence.iter().collect();
    let b: FxHashSet<&T> = other.iter().collect();
    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}
