//! Random combination generation and candidate validation.
//!
//! Generation and validation must run against the same alphabet snapshot;
//! the config layer resolves each lock's alphabet once per round and hands
//! it to both.

use rand::Rng;
use thiserror::Error;

use crate::charset::Alphabet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboError {
    #[error("combination must be {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("character '{ch}' is not available on the wheels")]
    InvalidCharacter { ch: char },
}

/// Draw `length` characters independently and uniformly from `alphabet`.
/// Repeats between positions are allowed.
pub fn generate<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..alphabet.len());
            alphabet.char_at(idx).unwrap_or('0')
        })
        .collect()
}

/// Check a candidate against the lock's dimensions and alphabet.
/// Returns the uppercase-normalized combination on success.
///
/// # Errors
///
/// Returns `ComboError::LengthMismatch` when the candidate is the wrong
/// length, or `ComboError::InvalidCharacter` for the first character that is
/// not in the alphabet.
pub fn validate(candidate: &str, alphabet: &Alphabet, length: usize) -> Result<String, ComboError> {
    let normalized: String = candidate.chars().map(|c| c.to_ascii_uppercase()).collect();
    let actual = normalized.chars().count();
    if actual != length {
        return Err(ComboError::LengthMismatch {
            expected: length,
            actual,
        });
    }
    for ch in normalized.chars() {
        if !alphabet.contains(ch) {
            return Err(ComboError::InvalidCharacter { ch });
        }
    }
    Ok(normalized)
}
