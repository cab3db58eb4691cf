use serde::{Deserialize, Serialize};
use words::AlphabetCodec;

use crate::{
    dominance,
    index::WordIndex,
    report::{self, Report},
    scoring::{self, Outcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Sequential,
    /// Split the quadratic stages across the rayon pool.
    #[cfg(feature = "parallel")]
    Parallel { chunk_size: usize },
}

/// Sizes observed after each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub words: usize,
    pub unique_words: usize,
    pub unique_masks: usize,
    pub dominant_masks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub stats: Stats,
    /// `None` when fewer than two dominant masks remain.
    pub report: Option<Report>,
    /// Letters covered by each winning mask pair, in winning pair order.
    pub coverage: Vec<String>,
}

/// Run the whole search over `tokens`.
pub fn run<I, S>(codec: &AlphabetCodec, tokens: I, execution: Execution) -> Summary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let index = WordIndex::build(codec, tokens);
    tracing::info!(
        words = index.token_count(),
        unique_words = index.unique_token_count(),
        unique_masks = index.distinct_masks().len(),
        "indexed corpus"
    );

    let dominant = match execution {
        Execution::Sequential => dominance::dominant_masks(index.distinct_masks()),
        #[cfg(feature = "parallel")]
        Execution::Parallel { chunk_size } => {
            dominance::dominant_masks_par(index.distinct_masks(), chunk_size)
        }
    };
    tracing::info!(dominant_masks = dominant.len(), "pruned dominated masks");

    let outcome = match execution {
        Execution::Sequential => scoring::best_pairs(&dominant),
        #[cfg(feature = "parallel")]
        Execution::Parallel { .. } => scoring::best_pairs_par(&dominant),
    };

    let stats = Stats {
        words: index.token_count(),
        unique_words: index.unique_token_count(),
        unique_masks: index.distinct_masks().len(),
        dominant_masks: dominant.len(),
    };

    match outcome {
        Outcome::Found(best) => {
            tracing::info!(score = best.score, pairs = best.pairs.len(), "found best pairs");
            let coverage = best
                .pairs
                .iter()
                .map(|(a, b)| codec.decode(a | b))
                .collect();
            Summary {
                stats,
                report: Some(report::expand(&best, &index)),
                coverage,
            }
        }
        Outcome::NoPairsAvailable => {
            tracing::info!("no pairs available");
            Summary {
                stats,
                report: None,
                coverage: Vec::new(),
            }
        }
    }
}
