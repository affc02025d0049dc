//! Delay abstraction for platform-agnostic blocking waits.

use std::thread;
use std::time::Duration;

/// Trait for abstracting the blocking delay between frames.
///
/// The player calls this for every frame hold and inter-play pause. Tests
/// substitute a recording implementation so playback runs without real
/// wall-clock waits.
pub trait DelaySource {
    /// Blocks the current thread for the given number of milliseconds.
    fn wait_ms(&mut self, millis: u64);
}

/// [`DelaySource`] backed by [`std::thread::sleep`].
///
/// No timing correction is applied: if a frame write overruns, the
/// animation simply drifts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl DelaySource for ThreadDelay {
    fn wait_ms(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}
