//! Uniform random integers from a cryptographically secure source.
//!
//! Values are drawn as 64-bit words and rejection sampled, so every result
//! in `[0, bound)` is equally likely regardless of the bound.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::DicewareError;

/// Uniform random integers below a bound.
pub trait RandomSource {
    /// Return a value uniformly distributed over `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`DicewareError::EmptyRange`] if `bound` is zero and
    /// [`DicewareError::Entropy`] if the entropy source cannot be read.
    fn next_below(&mut self, bound: usize) -> Result<usize, DicewareError>;
}

/// [`RandomSource`] over any CSPRNG. Defaults to the operating system RNG.
#[derive(Debug, Clone, Default)]
pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    /// Random source backed by `OsRng`.
    #[must_use]
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    /// Wrap an existing CSPRNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    fn next_u64(&mut self) -> Result<u64, DicewareError> {
        let mut buf = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut buf)
            .map_err(|e| DicewareError::Entropy(e.to_string()))?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl<R: RngCore + CryptoRng> RandomSource for SecureRandom<R> {
    fn next_below(&mut self, bound: usize) -> Result<usize, DicewareError> {
        let bound = u64::try_from(bound).map_err(|_| DicewareError::EmptyRange)?;
        let Some(threshold) = bound.wrapping_neg().checked_rem(bound) else {
            return Err(DicewareError::EmptyRange);
        };
        // Draws below `2^64 mod bound` would over-represent the low residues.
        loop {
            let value = self.next_u64()?;
            if value >= threshold {
                let reduced = value.checked_rem(bound).ok_or(DicewareError::EmptyRange)?;
                return usize::try_from(reduced).map_err(|_| DicewareError::EmptyRange);
            }
        }
    }
}
