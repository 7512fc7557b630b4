//! Bounded search for a candidate that fits the length bounds.

use std::time::Instant;

use super::composer::{compose, Composed};
use super::GenerationLimits;
use crate::dictionary::WordDictionary;
use crate::error::DicewareError;
use crate::random::RandomSource;

/// How a solve ended.
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A candidate fit the bounds. Not yet capitalized.
    Accepted {
        /// The accepted candidate.
        password: String,
        /// Candidates composed, including the accepted one.
        attempts: u32,
    },
    /// The deadline passed first.
    TimedOut {
        /// Candidates composed before the deadline.
        attempts: u32,
    },
    /// The attempt cap was reached first.
    AttemptsExhausted {
        /// Candidates composed.
        attempts: u32,
    },
    /// `min_len > max_len`; nothing was composed.
    Unsatisfiable,
}

impl Outcome {
    /// The accepted password, or the empty string for every failure.
    #[must_use]
    pub fn into_password(self) -> String {
        match self {
            Self::Accepted { password, .. } => password,
            _ => String::new(),
        }
    }

    /// Whether a candidate was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { attempts, .. } => f
                .debug_struct("Accepted")
                .field("password", &"***")
                .field("attempts", attempts)
                .finish(),
            Self::TimedOut { attempts } => {
                f.debug_struct("TimedOut").field("attempts", attempts).finish()
            }
            Self::AttemptsExhausted { attempts } => f
                .debug_struct("AttemptsExhausted")
                .field("attempts", attempts)
                .finish(),
            Self::Unsatisfiable => f.write_str("Unsatisfiable"),
        }
    }
}

/// Compose candidates until one has an effective length within
/// `min_len..=max_len`.
///
/// The attempt cap is checked before every attempt and the deadline both
/// before every attempt and between word draws; either one ends the
/// search. A candidate is abandoned as soon as it grows past `max_len`, so
/// a huge `word_count` costs no more than a short one. A rejected
/// candidate is discarded, never returned as a best effort.
///
/// # Errors
///
/// Propagates failures of the random source.
pub fn solve<R: RandomSource + ?Sized>(
    dictionary: &WordDictionary,
    word_count: usize,
    separator: &str,
    min_len: usize,
    max_len: usize,
    limits: GenerationLimits,
    rng: &mut R,
) -> Result<Outcome, DicewareError> {
    if min_len > max_len {
        return Ok(Outcome::Unsatisfiable);
    }

    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        if attempts >= limits.max_attempts {
            return Ok(Outcome::AttemptsExhausted { attempts });
        }
        if started.elapsed() >= limits.deadline {
            return Ok(Outcome::TimedOut { attempts });
        }

        attempts = attempts.saturating_add(1);
        let composed = compose(
            dictionary,
            word_count,
            separator,
            max_len,
            started,
            limits.deadline,
            rng,
        )?;
        match composed {
            Composed::Complete(candidate) if candidate.fits(min_len, max_len) => {
                tracing::trace!(attempts, dictionary = dictionary.name(), "candidate accepted");
                return Ok(Outcome::Accepted {
                    password: candidate.password,
                    attempts,
                });
            }
            Composed::OutOfTime => return Ok(Outcome::TimedOut { attempts }),
            Composed::Complete(_) | Composed::TooLong => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SecureRandom;
    use std::time::Duration;

    fn fixture() -> WordDictionary {
        // Lengths 4, 6 and 8.
        WordDictionary::parse("fixture", "fern\nspruce\nmagnolia\n").unwrap()
    }

    #[test]
    fn accepts_first_fitting_candidate() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let outcome = solve(&dict, 2, " ", 7, 40, GenerationLimits::default(), &mut rng).unwrap();
        // Every 2-word candidate is between 11 and 19 bytes long.
        assert!(matches!(outcome, Outcome::Accepted { attempts: 1, .. }));
    }

    #[test]
    fn retries_until_fit() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        // Only "magnolia magnolia" plus suffix reaches 19.
        let outcome = solve(&dict, 2, " ", 19, 19, GenerationLimits::default(), &mut rng).unwrap();
        let Outcome::Accepted { password, .. } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert!(password.starts_with("magnolia magnolia"));
    }

    #[test]
    fn attempt_cap_trips() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let limits = GenerationLimits {
            max_attempts: 50,
            deadline: Duration::from_secs(60),
        };
        let outcome = solve(&dict, 2, " ", 100, 200, limits, &mut rng).unwrap();
        assert_eq!(outcome, Outcome::AttemptsExhausted { attempts: 50 });
        assert_eq!(outcome.into_password(), "");
    }

    #[test]
    fn deadline_trips() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let limits = GenerationLimits {
            max_attempts: u32::MAX,
            deadline: Duration::from_millis(20),
        };
        let started = Instant::now();
        let outcome = solve(&dict, 2, " ", 100, 200, limits, &mut rng).unwrap();
        assert!(matches!(outcome, Outcome::TimedOut { attempts } if attempts > 0));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn zero_deadline_composes_nothing() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let limits = GenerationLimits {
            max_attempts: 10,
            deadline: Duration::ZERO,
        };
        let outcome = solve(&dict, 2, " ", 0, 200, limits, &mut rng).unwrap();
        assert_eq!(outcome, Outcome::TimedOut { attempts: 0 });
    }

    #[test]
    fn huge_word_count_exhausts_quickly() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let started = Instant::now();
        let outcome = solve(
            &dict,
            20_000_000,
            " ",
            4,
            32,
            GenerationLimits::default(),
            &mut rng,
        )
        .unwrap();
        assert!(!outcome.is_accepted());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn deadline_interrupts_a_single_candidate() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let limits = GenerationLimits {
            max_attempts: u32::MAX,
            deadline: Duration::from_millis(20),
        };
        let started = Instant::now();
        let outcome = solve(&dict, usize::MAX, " ", 0, usize::MAX, limits, &mut rng).unwrap();
        assert_eq!(outcome, Outcome::TimedOut { attempts: 1 });
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn inverted_bounds_are_unsatisfiable() {
        let dict = fixture();
        let mut rng = SecureRandom::os();
        let outcome = solve(&dict, 2, " ", 30, 10, GenerationLimits::default(), &mut rng).unwrap();
        assert_eq!(outcome, Outcome::Unsatisfiable);
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn debug_hides_password() {
        let outcome = Outcome::Accepted {
            password: "fern spruce1!".to_string(),
            attempts: 3,
        };
        let shown = format!("{outcome:?}");
        assert!(!shown.contains("fern"));
        assert!(shown.contains("attempts: 3"));
    }
}
