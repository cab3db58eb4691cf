use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{index::WordIndex, scoring::BestPairs};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordPair(pub String, pub String);

impl Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Best score and every word pair reaching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub score: u32,
    pub pairs: Vec<WordPair>,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "best score {}: {}", self.score, self.pairs.iter().join(", "))
    }
}

/// Expand winning mask pairs into word pairs.
///
/// Pairs follow the order of `best.pairs`, and within one mask pair the
/// order of the cartesian product of both word groups.
pub fn expand(best: &BestPairs, index: &WordIndex) -> Report {
    let pairs = best
        .pairs
        .iter()
        .flat_map(|(a, b)| {
            index
                .words(*a)
                .iter()
                .cartesian_product(index.words(*b))
                .map(|(first, second)| WordPair(first.clone(), second.clone()))
        })
        .collect();

    Report {
        score: best.score,
        pairs,
    }
}
