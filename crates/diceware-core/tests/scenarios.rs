#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! End-to-end generation scenarios against the embedded dictionaries.

use std::time::{Duration, Instant};

use diceware_core::dictionary::embedded;
use diceware_core::password::SYMBOLS;
use diceware_core::{generate_password, WordCollection};

/// The solver deadline plus generous scheduling slack.
const FAILURE_BUDGET: Duration = Duration::from_secs(3);

fn words() -> WordCollection {
    embedded::collection(true).unwrap()
}

fn assert_well_formed(pw: &str, min_len: usize, max_len: usize) {
    let len = pw.len();
    assert!(!pw.is_empty());
    assert!(
        (min_len..=max_len).contains(&len),
        "length {len} outside {min_len}..={max_len}: {pw}"
    );
    assert!(pw.chars().next().unwrap().is_uppercase(), "not capitalized: {pw}");
    let mut tail = pw.chars().rev();
    assert!(SYMBOLS.contains(&tail.next().unwrap()));
    assert!(tail.next().unwrap().is_ascii_digit());
}

/// Scenario A: four words, space separated, 4..=64.
#[test]
fn four_words_fit_64() {
    let words = words();
    for extended in [false, true] {
        let pw = generate_password(&words, 4, " ", 64, 4, extended).unwrap();
        assert_well_formed(&pw, 4, 64);
        assert_eq!(pw.split(' ').count(), 4);
    }
}

/// Scenario B: ninety words never fit in 64 characters.
#[test]
fn ninety_words_with_digit_separator_fail() {
    let words = words();
    let started = Instant::now();
    let pw = generate_password(&words, 90, "3", 64, 4, false).unwrap();
    assert_eq!(pw, "");
    assert!(started.elapsed() < FAILURE_BUDGET);
}

/// Scenario C: five words, space separated, 4..=32.
#[test]
fn five_words_fit_32() {
    let words = words();
    let pw = generate_password(&words, 5, " ", 32, 4, false).unwrap();
    assert_well_formed(&pw, 4, 32);
}

/// Scenario D: ninety words never fit in 10 characters.
#[test]
fn ninety_words_in_ten_chars_fail() {
    let words = words();
    let started = Instant::now();
    let pw = generate_password(&words, 90, " ", 10, 4, false).unwrap();
    assert_eq!(pw, "");
    assert!(started.elapsed() < FAILURE_BUDGET);
}

/// Default web form values.
#[test]
fn defaults_fit() {
    let words = words();
    for _ in 0..25 {
        let pw = generate_password(&words, 3, " ", 32, 20, false).unwrap();
        assert_well_formed(&pw, 20, 32);
    }
}

/// Inverted bounds fail immediately.
#[test]
fn min_above_max_fails_fast() {
    let words = words();
    let started = Instant::now();
    assert_eq!(generate_password(&words, 3, " ", 10, 30, false).unwrap(), "");
    assert!(started.elapsed() < Duration::from_millis(100));
}
