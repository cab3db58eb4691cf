use std::collections::HashMap;

pub type Bitmask = u64;

/// Number of letters a single [`Bitmask`] can track.
pub const MASK_WIDTH: u32 = Bitmask::BITS;

/// Letters used when no alphabet is configured.
pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("alphabet has {len} letters but masks only hold {width}")]
    TooManyLetters { len: usize, width: u32 },
    #[error("letter {0:?} appears more than once in the alphabet")]
    DuplicateLetter(char),
    #[error("alphabet is empty")]
    Empty,
    #[error("letter {0:?} does not lowercase to a single letter")]
    MultiCharLowercase(char),
}

/// Ordered set of allowed letters. The position of a letter is its bit in a [`Bitmask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from its letters, lowercased, in the given order.
    ///
    /// Letters whose lowercase form spans several chars (such as `İ`) are rejected.
    pub fn new(letters: &str) -> Result<Self, ConfigurationError> {
        let letters = letters
            .chars()
            .map(|letter| {
                let mut lower = letter.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(single), None) => Ok(single),
                    _ => Err(ConfigurationError::MultiCharLowercase(letter)),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;
        if letters.is_empty() {
            return Err(ConfigurationError::Empty);
        }
        if letters.len() > MASK_WIDTH as usize {
            return Err(ConfigurationError::TooManyLetters {
                len: letters.len(),
                width: MASK_WIDTH,
            });
        }
        for (idx, letter) in letters.iter().enumerate() {
            if letters[..idx].contains(letter) {
                return Err(ConfigurationError::DuplicateLetter(*letter));
            }
        }
        Ok(Self { letters })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Reduces words to the letters of an [`Alphabet`] and to their presence masks.
#[derive(Debug, Clone)]
pub struct AlphabetCodec {
    alphabet: Alphabet,
    positions: HashMap<char, u32>,
}

impl AlphabetCodec {
    pub fn new(alphabet: Alphabet) -> Self {
        let positions = alphabet
            .letters
            .iter()
            .enumerate()
            .map(|(idx, letter)| (*letter, idx as u32))
            .collect();
        Self {
            alphabet,
            positions,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Keep only the characters of `token` that belong to the alphabet, in order.
    ///
    /// Uppercase input is folded to lowercase first, so the result is always lowercase.
    pub fn strip(&self, token: &str) -> String {
        token
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| self.positions.contains_key(c))
            .collect()
    }

    /// Compute the presence mask of a stripped word.
    ///
    /// Characters outside the alphabet are ignored, so this never fails;
    /// the empty word encodes to `0`.
    pub fn encode(&self, word: &str) -> Bitmask {
        word.chars()
            .fold(0, |bm, c| bm | self.bitmask(c).unwrap_or(0))
    }

    /// Mask with the single bit of `letter`, if it is in the alphabet.
    pub fn bitmask(&self, letter: char) -> Option<Bitmask> {
        self.positions.get(&letter).map(|pos| letters::bitmask(*pos))
    }

    /// Letters set in `mask`, in alphabet order.
    pub fn decode(&self, mask: Bitmask) -> String {
        self.alphabet
            .letters
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & letters::bitmask(*idx as u32) != 0)
            .map(|(_, letter)| *letter)
            .collect()
    }
}

pub mod letters {
    /// Mask with only bit `position` set.
    pub fn bitmask(position: u32) -> super::Bitmask {
        1 << position
    }

    /// Number of letters present in a mask.
    pub fn count(mask: super::Bitmask) -> u32 {
        mask.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(letters: &str) -> AlphabetCodec {
        AlphabetCodec::new(Alphabet::new(letters).unwrap())
    }

    #[test]
    fn alphabet_rejects_too_many_letters() {
        let letters: String = (0..65u32)
            .map(|i| char::from_u32(0x4e00 + i).unwrap())
            .collect();
        assert_eq!(
            Alphabet::new(&letters),
            Err(ConfigurationError::TooManyLetters { len: 65, width: 64 })
        );
    }

    #[test]
    fn alphabet_accepts_full_width() {
        let letters: String = (0..64u32)
            .map(|i| char::from_u32(0x4e00 + i).unwrap())
            .collect();
        assert_eq!(Alphabet::new(&letters).unwrap().len(), 64);
    }

    #[test]
    fn alphabet_rejects_duplicates_and_empty() {
        assert_eq!(
            Alphabet::new("abA"),
            Err(ConfigurationError::DuplicateLetter('a'))
        );
        assert_eq!(Alphabet::new(""), Err(ConfigurationError::Empty));
    }

    #[test]
    fn alphabet_rejects_letters_with_multi_char_lowercase() {
        assert_eq!(
            Alphabet::new("\u{130}ab"),
            Err(ConfigurationError::MultiCharLowercase('\u{130}'))
        );
        assert_eq!(Alphabet::new("ÉAB").unwrap().len(), 3);
    }

    #[test]
    fn strip_keeps_alphabet_letters_in_order() {
        let codec = codec("abcd");
        assert_eq!(codec.strip("d-a!b?"), "dab");
        assert_eq!(codec.strip("Bad"), "bad");
        assert_eq!(codec.strip("xyz"), "");
    }

    #[test]
    fn encode_marks_presence_only() {
        let codec = codec("abcd");
        assert_eq!(codec.encode("ab"), 0b0011);
        assert_eq!(codec.encode("cd"), 0b1100);
        assert_eq!(codec.encode("aaaab"), codec.encode("ba"));
        assert_eq!(codec.encode(""), 0);
    }

    #[test]
    fn encode_ignores_unknown_characters() {
        let codec = codec("abc");
        assert_eq!(codec.encode("a1z"), 0b001);
    }

    #[test]
    fn decode_lists_letters_in_alphabet_order() {
        let codec = codec(LATIN);
        assert_eq!(codec.decode(codec.encode("zebra")), "aberz");
        assert_eq!(codec.decode(0), "");
    }

    #[test]
    fn letter_count_is_popcount() {
        assert_eq!(letters::count(0b1011), 3);
        assert_eq!(letters::count(0), 0);
    }
}
