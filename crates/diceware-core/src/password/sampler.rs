//! Word, digit and symbol draws.

use super::{is_eligible_word, SYMBOLS};
use crate::dictionary::WordDictionary;
use crate::error::DicewareError;
use crate::random::RandomSource;

/// Draw a uniformly random word of `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`
/// bytes.
///
/// Draws over the whole dictionary and discards words outside the window.
/// Dictionaries are validated on load to hold at least one eligible word,
/// so the loop terminates.
///
/// # Errors
///
/// Propagates failures of the random source.
pub fn sample_word<'a, R: RandomSource + ?Sized>(
    dictionary: &'a WordDictionary,
    rng: &mut R,
) -> Result<&'a str, DicewareError> {
    loop {
        let index = rng.next_below(dictionary.count())?;
        if let Some(word) = dictionary.get(index) {
            if is_eligible_word(word) {
                return Ok(word);
            }
        }
    }
}

/// Draw a decimal digit.
///
/// # Errors
///
/// Propagates failures of the random source.
pub fn random_digit<R: RandomSource + ?Sized>(rng: &mut R) -> Result<char, DicewareError> {
    let value = rng.next_below(10)?;
    u32::try_from(value)
        .ok()
        .and_then(|v| char::from_digit(v, 10))
        .ok_or(DicewareError::EmptyRange)
}

/// Draw one of [`SYMBOLS`].
///
/// # Errors
///
/// Propagates failures of the random source.
pub fn random_symbol<R: RandomSource + ?Sized>(rng: &mut R) -> Result<char, DicewareError> {
    let index = rng.next_below(SYMBOLS.len())?;
    SYMBOLS
        .get(index)
        .copied()
        .ok_or(DicewareError::EmptyRange)
}
