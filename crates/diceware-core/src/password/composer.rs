//! Single candidate assembly.

use std::time::{Duration, Instant};

use super::sampler::{random_digit, random_symbol, sample_word};
use crate::dictionary::WordDictionary;
use crate::error::DicewareError;
use crate::random::RandomSource;

/// Bytes appended after the word sequence: one digit, one symbol.
const SUFFIX_LENGTH: usize = 2;

/// A composed, not yet capitalized passphrase.
#[derive(Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Words, separators, digit and symbol.
    pub password: String,
    /// Bytes in the word sequence with separators, plus the digit and
    /// symbol. This is what the length bounds are checked against.
    pub effective_length: usize,
}

impl Candidate {
    /// Whether the effective length lies within `min_len..=max_len`.
    #[must_use]
    pub const fn fits(&self, min_len: usize, max_len: usize) -> bool {
        min_len <= self.effective_length && self.effective_length <= max_len
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("password", &"***")
            .field("effective_length", &self.effective_length)
            .finish()
    }
}

/// Result of one composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    /// Every word was drawn and the suffix appended.
    Complete(Candidate),
    /// The running length passed `max_len`; no further words were drawn.
    TooLong,
    /// The deadline passed while drawing words.
    OutOfTime,
}

/// Join `word_count` sampled words with `separator` and append a digit and
/// a symbol.
///
/// Gives up as soon as the words drawn so far plus the suffix exceed
/// `max_len`, or once `deadline` has elapsed since `started`, so the cost
/// of one call is bounded by `max_len` and the deadline rather than by
/// `word_count`.
///
/// # Errors
///
/// Propagates failures of the random source.
pub fn compose<R: RandomSource + ?Sized>(
    dictionary: &WordDictionary,
    word_count: usize,
    separator: &str,
    max_len: usize,
    started: Instant,
    deadline: Duration,
    rng: &mut R,
) -> Result<Composed, DicewareError> {
    let mut password = String::new();
    let mut length: usize = 0;

    for i in 0..word_count {
        if started.elapsed() >= deadline {
            return Ok(Composed::OutOfTime);
        }
        let word = sample_word(dictionary, rng)?;
        if i > 0 {
            length = length.saturating_add(separator.len());
        }
        length = length.saturating_add(word.len());
        if length.saturating_add(SUFFIX_LENGTH) > max_len {
            return Ok(Composed::TooLong);
        }
        if i > 0 {
            password.push_str(separator);
        }
        password.push_str(word);
    }

    let effective_length = length.saturating_add(SUFFIX_LENGTH);
    if effective_length > max_len {
        return Ok(Composed::TooLong);
    }

    password.push(random_digit(rng)?);
    password.push(random_symbol(rng)?);

    Ok(Composed::Complete(Candidate {
        password,
        effective_length,
    }))
}
