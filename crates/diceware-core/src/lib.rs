//! `diceware-core` — constrained diceware passphrase generation.
//!
//! Pure, synchronous engine: zero network, zero async. Dictionaries are
//! loaded once and shared read-only; each call to [`generate_password`]
//! draws words with a CSPRNG until the result fits the requested bounds.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;

pub mod dictionary;

pub mod password;

pub use dictionary::{WordCollection, WordDictionary};
pub use error::DicewareError;
pub use password::{
    finalize, generate_password, generate_password_with, GenerationLimits, Outcome,
    PasswordRequest, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR,
    DEFAULT_WORD_COUNT,
};
pub use random::{RandomSource, SecureRandom};
