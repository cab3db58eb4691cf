use serde::{Deserialize, Serialize};
use words::{Bitmask, letters};

/// Every mask pair reaching the highest combined letter count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPairs {
    pub score: u32,
    pub pairs: Vec<(Bitmask, Bitmask)>,
}

impl BestPairs {
    fn offer(&mut self, pair: (Bitmask, Bitmask), score: u32) {
        if score > self.score {
            self.score = score;
            self.pairs.clear();
        }
        if score == self.score {
            self.pairs.push(pair);
        }
    }

    /// Keep the higher score, or both pair lists on a tie (`self` first).
    fn merge(mut self, other: Self) -> Self {
        if other.pairs.is_empty() || other.score < self.score {
            return self;
        }
        if self.pairs.is_empty() || other.score > self.score {
            return other;
        }
        self.pairs.extend(other.pairs);
        self
    }

    fn empty() -> Self {
        Self {
            score: 0,
            pairs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Found(BestPairs),
    /// Fewer than two dominant masks, so no pair of distinct masks exists.
    NoPairsAvailable,
}

impl Outcome {
    fn from_best(best: BestPairs) -> Self {
        if best.pairs.is_empty() {
            Outcome::NoPairsAvailable
        } else {
            Outcome::Found(best)
        }
    }
}

/// Number of letters covered by two masks together.
pub fn combined_score(a: Bitmask, b: Bitmask) -> u32 {
    letters::count(a | b)
}

fn best_in_row(masks: &[Bitmask], i: usize) -> BestPairs {
    let mut best = BestPairs::empty();
    for &other in &masks[i + 1..] {
        best.offer((masks[i], other), combined_score(masks[i], other));
    }
    best
}

/// Compare every unordered pair of `masks` and collect all pairs with the
/// highest combined letter count. Ties are all kept, in scan order.
pub fn best_pairs(masks: &[Bitmask]) -> Outcome {
    let mut best = BestPairs::empty();
    for i in 0..masks.len() {
        best = best.merge(best_in_row(masks, i));
    }
    tracing::debug!(
        masks = masks.len(),
        score = best.score,
        winners = best.pairs.len(),
        "scored pairs"
    );
    Outcome::from_best(best)
}

/// Row-parallel variant of [`best_pairs`] producing the same pairs in the same order.
#[cfg(feature = "parallel")]
pub fn best_pairs_par(masks: &[Bitmask]) -> Outcome {
    use rayon::prelude::*;

    let best = (0..masks.len())
        .into_par_iter()
        .map(|i| best_in_row(masks, i))
        .reduce(BestPairs::empty, BestPairs::merge);
    tracing::debug!(
        masks = masks.len(),
        score = best.score,
        winners = best.pairs.len(),
        "scored pairs in parallel"
    );
    Outcome::from_best(best)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::dominance::dominant_masks;

    #[test]
    fn disjoint_pair_covers_all_letters() {
        assert_eq!(
            best_pairs(&[0b0011, 0b1100]),
            Outcome::Found(BestPairs {
                score: 4,
                pairs: vec![(0b0011, 0b1100)],
            })
        );
    }

    #[test]
    fn ties_are_all_reported_in_scan_order() {
        // 3 letters from every pair.
        let outcome = best_pairs(&[0b011, 0b110, 0b101]);
        assert_eq!(
            outcome,
            Outcome::Found(BestPairs {
                score: 3,
                pairs: vec![(0b011, 0b110), (0b011, 0b101), (0b110, 0b101)],
            })
        );
    }

    #[test]
    fn lower_scores_are_dropped_when_a_better_pair_appears() {
        let outcome = best_pairs(&[0b0011, 0b0110, 0b1100]);
        assert_eq!(
            outcome,
            Outcome::Found(BestPairs {
                score: 4,
                pairs: vec![(0b0011, 0b1100)],
            })
        );
    }

    #[test]
    fn fewer_than_two_masks_has_no_pairs() {
        assert_eq!(best_pairs(&[]), Outcome::NoPairsAvailable);
        assert_eq!(best_pairs(&[0b111]), Outcome::NoPairsAvailable);
    }

    #[test]
    fn merge_keeps_higher_score_or_joins_ties() {
        let low = BestPairs { score: 2, pairs: vec![(0b01, 0b10)] };
        let high = BestPairs { score: 3, pairs: vec![(0b011, 0b100)] };
        let tie = BestPairs { score: 3, pairs: vec![(0b101, 0b010)] };
        assert_eq!(low.clone().merge(high.clone()), high);
        assert_eq!(high.clone().merge(low), high);
        assert_eq!(
            high.clone().merge(tie).pairs,
            vec![(0b011, 0b100), (0b101, 0b010)]
        );
        assert_eq!(BestPairs::empty().merge(BestPairs::empty()), BestPairs::empty());
    }

    proptest! {
        #[test]
        fn no_pair_beats_the_best_score(masks in prop::collection::vec(1u64..4096, 2..48)) {
            let dominant = dominant_masks(&masks);
            match best_pairs(&dominant) {
                Outcome::Found(best) => {
                    for (i, a) in dominant.iter().enumerate() {
                        for b in &dominant[i + 1..] {
                            prop_assert!(combined_score(*a, *b) <= best.score);
                        }
                    }
                    for (a, b) in &best.pairs {
                        prop_assert_eq!(combined_score(*a, *b), best.score);
                        prop_assert_ne!(a, b);
                    }
                }
                Outcome::NoPairsAvailable => prop_assert!(dominant.len() < 2),
            }
        }

        #[test]
        fn scoring_is_deterministic(masks in prop::collection::vec(0u64..4096, 0..48)) {
            prop_assert_eq!(best_pairs(&masks), best_pairs(&masks));
        }
    }

    #[cfg(feature = "parallel")]
    proptest! {
        #[test]
        fn parallel_scan_matches_sequential(masks in prop::collection::vec(0u64..4096, 0..64)) {
            let dominant = dominant_masks(&masks);
            prop_assert_eq!(best_pairs_par(&dominant), best_pairs(&dominant));
        }
    }
}
