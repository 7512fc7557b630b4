//! Response-time floor for generation routes.

use std::time::{Duration, Instant};

use diceware_core::{RandomSource, SecureRandom};

/// Upper bound (exclusive) of the random jitter added to the floor.
pub const JITTER_MS: usize = 50;

/// Sleep so that a response started at `started` takes at least
/// `floor` plus a random jitter in `[0, JITTER_MS)` milliseconds.
///
/// Does nothing when `floor` is zero or already elapsed. A failing random
/// source drops the jitter, never the floor.
pub async fn pad_response(started: Instant, floor: Duration) {
    if let Some(remaining) = remaining(started.elapsed(), floor, jitter()) {
        tokio::time::sleep(remaining).await;
    }
}

/// Time left to sleep, if any.
fn remaining(elapsed: Duration, floor: Duration, jitter: Duration) -> Option<Duration> {
    if floor.is_zero() || elapsed >= floor {
        return None;
    }
    floor
        .saturating_add(jitter)
        .checked_sub(elapsed)
        .filter(|d| !d.is_zero())
}

fn jitter() -> Duration {
    match SecureRandom::os().next_below(JITTER_MS) {
        Ok(ms) => Duration::from_millis(u64::try_from(ms).unwrap_or(0)),
        Err(err) => {
            tracing::warn!(error = %err, "response jitter unavailable");
            Duration::ZERO
        }
    }
}
