//! Reduction of a mask set to the maximal elements of the subset order.
//!
//! The scan is quadratic in the number of distinct masks, which is bounded by
//! the number of letter-presence patterns in the corpus, not by its size.

use words::Bitmask;

/// `true` when every letter of `inner` is also in `outer`.
pub fn is_subset(inner: Bitmask, outer: Bitmask) -> bool {
    inner & outer == inner
}

pub fn is_strict_subset(inner: Bitmask, outer: Bitmask) -> bool {
    inner != outer && is_subset(inner, outer)
}

/// Keep only the masks that are not a strict subset of another mask.
///
/// The returned set does not depend on input order; its order is the order in
/// which survivors were accepted. Repeated masks are kept once. Filtering an
/// already dominant set returns it unchanged.
pub fn dominant_masks(masks: &[Bitmask]) -> Vec<Bitmask> {
    let mut dominant: Vec<Bitmask> = Vec::new();

    'candidates: for &candidate in masks {
        let mut idx = 0;
        while idx < dominant.len() {
            let existing = dominant[idx];
            if is_subset(candidate, existing) {
                continue 'candidates;
            }
            if is_strict_subset(existing, candidate) {
                // A candidate may dominate several entries, keep scanning.
                dominant.remove(idx);
            } else {
                idx += 1;
            }
        }
        dominant.push(candidate);
    }

    tracing::debug!(
        distinct = masks.len(),
        dominant = dominant.len(),
        "filtered dominant masks"
    );
    dominant
}

/// Chunked variant of [`dominant_masks`].
///
/// Every chunk is filtered on its own, then chunk results are merged by
/// filtering their concatenation. A mask dominated in its own chunk is
/// dominated globally, so the merge only has to settle cross-chunk pairs.
#[cfg(feature = "parallel")]
pub fn dominant_masks_par(masks: &[Bitmask], chunk_size: usize) -> Vec<Bitmask> {
    use rayon::prelude::*;

    let chunk_size = chunk_size.max(1);
    tracing::debug!(
        distinct = masks.len(),
        chunk_size,
        "filtering dominant masks in parallel"
    );
    masks
        .par_chunks(chunk_size)
        .map(dominant_masks)
        .reduce(Vec::new, |mut left, right| {
            if right.is_empty() {
                return left;
            }
            left.extend(right);
            dominant_masks(&left)
        })
}
