//! Constrained diceware passphrase generation.
//!
//! A passphrase is `word_count` dictionary words joined by a separator,
//! followed by one random digit and one random symbol. Candidates are
//! generated until one fits the caller's length bounds, or until the
//! attempt cap or deadline in [`GenerationLimits`] is hit, in which case
//! the result is the empty string.
//!
//! All randomness comes from a [`RandomSource`]; the default is `OsRng`.

pub mod composer;
pub mod sampler;
pub mod solver;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dictionary::WordCollection;
use crate::error::DicewareError;
use crate::random::{RandomSource, SecureRandom};

pub use composer::{compose, Candidate, Composed};
pub use sampler::{random_digit, random_symbol, sample_word};
pub use solver::{solve, Outcome};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shortest word, in bytes, the sampler will return.
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word, in bytes, the sampler will return.
pub const MAX_WORD_LENGTH: usize = 16;

/// Symbols appended after the digit, in draw order.
pub const SYMBOLS: [char; 10] = ['!', '@', '#', '$', '%', '*', '/', '?', '.', ','];

/// Attempts the solver makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20_000;

/// Wall-clock budget of one solve.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

/// Default number of words.
pub const DEFAULT_WORD_COUNT: usize = 3;

/// Default separator.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Default upper bound on the effective length.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Default lower bound on the effective length.
pub const DEFAULT_MIN_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parameters of a single generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest {
    /// Number of dictionary words.
    pub word_count: usize,
    /// Text placed between consecutive words. May be empty.
    pub separator: String,
    /// Largest accepted effective length.
    pub max_len: usize,
    /// Smallest accepted effective length.
    pub min_len: usize,
    /// Draw from the complex dictionary instead of the simple one.
    pub use_extended: bool,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_len: DEFAULT_MAX_LENGTH,
            min_len: DEFAULT_MIN_LENGTH,
            use_extended: false,
        }
    }
}

/// Circuit breakers for the solver. Whichever trips first ends the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Maximum number of composed candidates.
    pub max_attempts: u32,
    /// Wall-clock budget measured from the start of the solve.
    pub deadline: Duration,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Whether the sampler may return `word`. Lengths are UTF-8 byte counts.
#[must_use]
pub const fn is_eligible_word(word: &str) -> bool {
    word.len() >= MIN_WORD_LENGTH && word.len() <= MAX_WORD_LENGTH
}

/// Generate a passphrase from `words` using `OsRng` and the default limits.
///
/// Returns an empty string when no candidate fits `min_len..=max_len`
/// within the limits.
///
/// # Errors
///
/// Returns [`DicewareError::Entropy`] if the OS random source fails and
/// [`DicewareError::DictionaryUnavailable`] if `use_extended` is set but no
/// complex dictionary is loaded.
pub fn generate_password(
    words: &WordCollection,
    word_count: usize,
    separator: &str,
    max_len: usize,
    min_len: usize,
    use_extended: bool,
) -> Result<String, DicewareError> {
    let request = PasswordRequest {
        word_count,
        separator: separator.to_string(),
        max_len,
        min_len,
        use_extended,
    };
    generate_password_with(
        words,
        &request,
        GenerationLimits::default(),
        &mut SecureRandom::os(),
    )
}

/// Generate a passphrase with an explicit random source and limits.
///
/// # Errors
///
/// See [`generate_password`].
pub fn generate_password_with<R: RandomSource + ?Sized>(
    words: &WordCollection,
    request: &PasswordRequest,
    limits: GenerationLimits,
    rng: &mut R,
) -> Result<String, DicewareError> {
    let dictionary = words.select(request.use_extended)?;
    let outcome = solve(
        dictionary,
        request.word_count,
        &request.separator,
        request.min_len,
        request.max_len,
        limits,
        rng,
    )?;

    match outcome {
        Outcome::Accepted { password, .. } => Ok(finalize(&password)),
        failed => {
            tracing::debug!(
                dictionary = dictionary.name(),
                word_count = request.word_count,
                min_len = request.min_len,
                max_len = request.max_len,
                outcome = ?failed,
                "no passphrase satisfied the length bounds"
            );
            Ok(String::new())
        }
    }
}

/// Uppercase the first character of `s`, leaving the rest untouched.
#[must_use]
pub fn finalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut out: String = c.to_uppercase().collect();
        out.push_str(chars.as_str());
        out
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
