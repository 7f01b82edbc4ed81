//! Thread-pausing helpers.

use rand::Rng;
use std::time::Duration;
use tracing::trace;

/// Pause the current thread for `duration`.
pub fn pause(duration: Duration) {
    trace!(millis = duration.as_millis() as u64, "pausing current thread");
    std::thread::sleep(duration);
}

/// Pause the current thread for a uniformly random duration below `max`.
///
/// A zero `max` returns immediately.
pub fn random_pause(max: Duration) {
    let max_millis = max.as_millis() as u64;
    if max_millis == 0 {
        trace!("zero max pause, not pausing");
        return;
    }

    let millis = rand::thread_rng().gen_range(0..max_millis);
    pause(Duration::from_millis(millis));
}
