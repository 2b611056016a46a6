use std::cmp::Ordering;

use crate::types::ranking::{RankedProduct, ScoredCandidate};

/// Order candidates best-first and keep at most `limit`.
///
/// `sort_by` is stable, so equal scores keep catalog order.
pub fn rank_candidates(mut scored: Vec<ScoredCandidate<'_>>, limit: usize) -> Vec<RankedProduct> {
    // Descending score
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

    scored.truncate(limit);
    scored.into_iter().map(ScoredCandidate::into_ranked).collect()
}
