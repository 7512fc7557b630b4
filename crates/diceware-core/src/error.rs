//! Error types for `diceware-core`.

use thiserror::Error;

/// Errors produced by dictionary loading and passphrase generation.
///
/// Running out of attempts or time while searching for a passphrase is
/// *not* an error: the generator reports it with an empty string.
#[derive(Debug, Error)]
pub enum DicewareError {
    /// The secure entropy source could not be read. Fatal for the request;
    /// there is no fallback to a weaker generator.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// A random value was requested below a bound of zero.
    #[error("random bound must be greater than zero")]
    EmptyRange,

    /// The dictionary resource contained no words.
    #[error("dictionary '{0}' contains no words")]
    EmptyDictionary(String),

    /// No word in the dictionary fits the sampler's length window.
    #[error("dictionary '{0}' has no word between the minimum and maximum word length")]
    NoEligibleWords(String),

    /// The extended dictionary was requested but is not loaded.
    #[error("extended dictionary is not loaded")]
    DictionaryUnavailable,

    /// Reading a dictionary resource failed.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
}
