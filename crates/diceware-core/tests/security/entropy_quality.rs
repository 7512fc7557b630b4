//! Entropy checks on generated passphrases.
//!
//! A broken CSPRNG shows up as repeated output long before it shows up in
//! any distribution statistic, so these tests look for collisions and for
//! the error path when the entropy source is unreadable.

use std::collections::HashSet;

use diceware_core::dictionary::embedded;
use diceware_core::{
    generate_password, generate_password_with, DicewareError, GenerationLimits, PasswordRequest,
    SecureRandom,
};
use rand::{CryptoRng, RngCore};

/// Entropy source that refuses every read.
struct UnreadableRng;

impl RngCore for UnreadableRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("generator must use try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("generator must use try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("generator must use try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::other("getrandom failed")))
    }
}

impl CryptoRng for UnreadableRng {}

/// 200 passphrases of 4 words from the extended list must all differ.
///
/// With ~3000 words the space is ~8e13 before the digit and symbol; a
/// collision in 200 draws means the random source is broken.
#[test]
fn passphrases_do_not_repeat() {
    let words = embedded::collection(true).unwrap();
    let seen: HashSet<String> = (0..200)
        .map(|_| generate_password(&words, 4, " ", 80, 4, true).unwrap())
        .collect();
    assert_eq!(seen.len(), 200, "generated duplicate passphrases");
}

/// An unreadable entropy source is an error, never an empty or weak result.
#[test]
fn unreadable_entropy_is_fatal() {
    let words = embedded::collection(false).unwrap();
    let mut rng = SecureRandom::new(UnreadableRng);
    let err = generate_password_with(
        &words,
        &PasswordRequest::default(),
        GenerationLimits::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, DicewareError::Entropy(_)), "got {err:?}");
}

/// Every word of the simple list is reachable: sampling often enough from a
/// small dictionary hits every eligible entry.
#[test]
fn every_eligible_word_reachable() {
    let dict = diceware_core::WordDictionary::parse(
        "small",
        "ant\nbeaver\ncamel\ndingo\nemu\nferret\ngibbon\n",
    )
    .unwrap();
    let mut rng = SecureRandom::os();
    let seen: HashSet<&str> = (0..2000)
        .map(|_| diceware_core::password::sample_word(&dict, &mut rng).unwrap())
        .collect();
    let expected: HashSet<&str> = ["beaver", "camel", "dingo", "ferret", "gibbon"]
        .into_iter()
        .collect();
    assert_eq!(seen, expected);
}
