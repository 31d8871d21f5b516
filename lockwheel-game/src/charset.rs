//! Character-class selection and alphabet resolution.
//!
//! Every lock cycles its wheels through an `Alphabet`: an ordered set of
//! characters assembled from up to three fixed base sets. The base sets are
//! disjoint, so concatenation alone yields a duplicate-free alphabet.

use serde::{Deserialize, Serialize};

pub const DIGIT_SET: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const LETTER_SET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
pub const SYMBOL_SET: &[char] = &['!', '@', '#', '$', '%', '&', '*', '?', '+', '='];

/// Which base character sets a lock draws its wheels from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharClasses {
    pub numbers: bool,
    pub letters: bool,
    pub symbols: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            numbers: true,
            letters: false,
            symbols: false,
        }
    }
}

impl CharClasses {
    #[must_use]
    pub const fn none(self) -> bool {
        !(self.numbers || self.letters || self.symbols)
    }
}

/// Ordered, non-empty character set. Wheel rendering indexes into this, so
/// the order is fixed at creation and never reshuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Build an alphabet from pre-deduplicated characters.
    /// Falls back to the digit set when `chars` is empty.
    #[must_use]
    pub fn from_chars(chars: Vec<char>) -> Self {
        if chars.is_empty() {
            Self(DIGIT_SET.to_vec())
        } else {
            Self(chars)
        }
    }

    #[must_use]
    pub fn digits() -> Self {
        Self(DIGIT_SET.to_vec())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the constructor guarantees at least the digit set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.0.iter().position(|&c| c == ch)
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// Result of resolving a class selection into a concrete alphabet.
/// `corrected` is set when an empty selection was replaced by the digit set;
/// the caller must write the implied `numbers = true` back into its config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlphabet {
    pub alphabet: Alphabet,
    pub corrected: bool,
}

/// Concatenate the enabled base sets in priority order: numbers, letters,
/// symbols. An all-false selection yields the digit set and reports the
/// correction instead of silently defaulting.
#[must_use]
pub fn resolve(classes: CharClasses) -> ResolvedAlphabet {
    if classes.none() {
        return ResolvedAlphabet {
            alphabet: Alphabet::digits(),
            corrected: true,
        };
    }
    let mut chars = Vec::new();
    if classes.numbers {
        chars.extend_from_slice(DIGIT_SET);
    }
    if classes.letters {
        chars.extend_from_slice(LETTER_SET);
    }
    if classes.symbols {
        chars.extend_from_slice(SYMBOL_SET);
    }
    ResolvedAlphabet {
        alphabet: Alphabet::from_chars(chars),
        corrected: false,
    }
}
