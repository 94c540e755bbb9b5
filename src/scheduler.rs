//! Frame scheduling and timing
//!
//! Provides non-blocking frame pacing without async/await or
//! platform-specific timers. The control loop polls [`FrameScheduler`]
//! every iteration and proceeds immediately either way, so button
//! handling is never delayed by animation timing.

use embassy_time::{Duration, Instant};

// A deadline counts as reached while `now - due` stays in the lower half
// of the tick range. Keeps the comparison correct across wraparound of
// the underlying counter.
const DUE_WINDOW: u64 = u64::MAX / 2;

/// Tracks when the next frame is due.
///
/// The scheduler never sleeps or waits; it only answers "is a frame due
/// at this instant". Starts due, so the first poll after boot renders
/// immediately.
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    next_frame: Instant,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            next_frame: Instant::from_millis(0),
        }
    }

    /// Whether the next frame deadline has been reached.
    ///
    /// Wraparound-safe: uses subtraction on raw ticks instead of a
    /// direct ordering comparison.
    pub fn is_frame_due(&self, now: Instant) -> bool {
        now.as_ticks().wrapping_sub(self.next_frame.as_ticks()) < DUE_WINDOW
    }

    /// Schedule the next frame `step_delay` after `now`.
    pub fn schedule_next(&mut self, now: Instant, step_delay: Duration) {
        self.next_frame = now + step_delay;
    }

    /// The current frame deadline.
    pub const fn next_frame(&self) -> Instant {
        self.next_frame
    }
}
