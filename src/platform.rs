//! Desktop platform helpers.

use std::time::Duration;

/// Sleeps for the remainder of a frame, spinning for the last stretch so frames land on time.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}
