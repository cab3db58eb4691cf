//! Maximal letter-coverage search over the words of a corpus.
//!
//! Words are reduced to presence masks ([`index`]), masks contained in other
//! masks are pruned ([`dominance`]), the remaining masks are compared pairwise
//! ([`scoring`]) and the winning masks are expanded back into words ([`report`]).

pub mod dominance;
pub mod index;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use dominance::dominant_masks;
pub use index::WordIndex;
pub use pipeline::{Execution, Stats, Summary, run};
pub use report::{Report, WordPair, expand};
pub use scoring::{BestPairs, Outcome, best_pairs};

#[cfg(feature = "parallel")]
pub use dominance::dominant_masks_par;
#[cfg(feature = "parallel")]
pub use scoring::best_pairs_par;
