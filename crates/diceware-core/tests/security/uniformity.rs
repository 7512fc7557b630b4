//! Distribution of the rejection sampler (chi-squared smoke test).
//!
//! Thresholds are loose: they catch modulo bias on awkward bounds and
//! degenerate sources, not subtle statistical flaws.

use diceware_core::{RandomSource, SecureRandom};

/// Pearson chi-squared statistic of `counts` against a uniform expectation.
#[allow(clippy::cast_precision_loss)]
fn chi_squared(counts: &[u64], total: u64) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// 2500 draws below 10: every value appears, none escapes the range.
#[test]
fn digits_complete_and_in_range() {
    let mut rng = SecureRandom::os();
    let mut counts = [0u64; 10];
    for _ in 0..2500 {
        let v = rng.next_below(10).unwrap();
        assert!(v < 10);
        counts[v] += 1;
    }
    assert!(counts.iter().all(|&c| c > 0), "missing value: {counts:?}");
}

/// Bound 10, 100k draws. 9 degrees of freedom: p=0.0001 critical ~33.7.
#[test]
fn digits_chi_squared() {
    let mut rng = SecureRandom::os();
    let total = 100_000u64;
    let mut counts = [0u64; 10];
    for _ in 0..total {
        counts[rng.next_below(10).unwrap()] += 1;
    }
    let stat = chi_squared(&counts, total);
    assert!(stat < 33.7, "chi-squared too high: {stat:.2} ({counts:?})");
}

/// A bound that does not divide 2^64 evenly. 6 degrees of freedom:
/// p=0.0001 critical ~27.9.
#[test]
fn odd_bound_chi_squared() {
    let mut rng = SecureRandom::os();
    let total = 70_000u64;
    let mut counts = [0u64; 7];
    for _ in 0..total {
        counts[rng.next_below(7).unwrap()] += 1;
    }
    let stat = chi_squared(&counts, total);
    assert!(stat < 27.9, "chi-squared too high: {stat:.2} ({counts:?})");
}
