use std::collections::{HashMap, HashSet};

use words::{AlphabetCodec, Bitmask};

/// Distinct stripped words grouped by their presence mask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    mask_to_words: HashMap<Bitmask, Vec<String>>,
    distinct_masks: Vec<Bitmask>,
    token_count: usize,
    unique_token_count: usize,
}

impl WordIndex {
    /// Index `tokens`, skipping repeats of a token already seen.
    ///
    /// Distinct tokens that strip to the same word are stored once.
    pub fn build<I, S>(codec: &AlphabetCodec, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut seen_tokens = HashSet::new();
        let mut seen_words = HashSet::new();

        for token in tokens {
            index.token_count += 1;
            let token = token.as_ref().to_lowercase();
            if seen_tokens.contains(&token) {
                continue;
            }
            let word = codec.strip(&token);
            seen_tokens.insert(token);
            index.unique_token_count += 1;
            if !seen_words.insert(word.clone()) {
                continue;
            }

            let mask = codec.encode(&word);
            let group = index.mask_to_words.entry(mask).or_default();
            if group.is_empty() {
                index.distinct_masks.push(mask);
            }
            group.push(word);
        }

        index
    }

    /// Masks in the order they were first seen.
    pub fn distinct_masks(&self) -> &[Bitmask] {
        &self.distinct_masks
    }

    /// Words sharing `mask`, in the order they were first seen.
    pub fn words(&self, mask: Bitmask) -> &[String] {
        self.mask_to_words
            .get(&mask)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn unique_token_count(&self) -> usize {
        self.unique_token_count
    }

    /// Iterate `(mask, words)` groups in first-seen mask order.
    pub fn groups(&self) -> impl Iterator<Item = (Bitmask, &[String])> + '_ {
        self.distinct_masks
            .iter()
            .map(|mask| (*mask, self.words(*mask)))
    }
}
