//! Wall-clock tick delivery
//!
//! The event loop polls frequently (for input responsiveness) but the
//! countdown must advance exactly once per elapsed second. `TickDriver`
//! anchors the countdown to wall-clock time and tells the loop how many
//! ticks are due on each pass.

use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Binds a [`SessionTimer`](super::SessionTimer) to wall-clock time
///
/// `arm()` when the timer enters Running, `cancel()` when it leaves.
/// Cancelling drops the anchor synchronously, so no tick computed against
/// the old anchor can be delivered after a pause or reset.
#[derive(Debug, Default)]
pub struct TickDriver {
    anchor: Option<Instant>,
}

impl TickDriver {
    /// Create an unarmed driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the next tick one second from now
    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    /// Anchor the next tick one second after the given instant
    pub fn arm_at(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    /// Drop the tick anchor; no further ticks are due until re-armed
    pub fn cancel(&mut self) {
        self.anchor = None;
    }

    /// Whether the driver is currently armed
    pub fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of whole seconds elapsed since the anchor, advancing it
    ///
    /// Returns 0 when unarmed or when less than a second has passed. The
    /// anchor moves forward by exactly the whole seconds consumed, so slow
    /// event-loop passes catch up without drifting.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let due = (elapsed.as_millis() / TICK_INTERVAL.as_millis()) as u32;
        if due > 0 {
            self.anchor = Some(anchor + TICK_INTERVAL * due);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_driver_has_no_ticks() {
        let mut driver = TickDriver::new();
        assert!(!driver.is_armed());
        assert_eq!(driver.due_ticks(Instant::now()), 0);
    }

    #[test]
    fn test_no_tick_before_a_full_second() {
        let mut driver = TickDriver::new();
        let start = Instant::now();
        driver.arm_at(start);
        assert_eq!(driver.due_ticks(start + Duration::from_millis(999)), 0);
    }

    #[test]
    fn test_one_tick_per_elapsed_second() {
        let mut driver = TickDriver::new();
        let start = Instant::now();
        driver.arm_at(start);

        assert_eq!(driver.due_ticks(start + Duration::from_secs(1)), 1);
        assert_eq!(driver.due_ticks(start + Duration::from_secs(2)), 1);
        // Same instant again: already consumed
        assert_eq!(driver.due_ticks(start + Duration::from_secs(2)), 0);
    }

    #[test]
    fn test_slow_pass_catches_up() {
        let mut driver = TickDriver::new();
        let start = Instant::now();
        driver.arm_at(start);

        // Loop stalled for 3.5 seconds: three ticks due, half a second carried
        assert_eq!(driver.due_ticks(start + Duration::from_millis(3500)), 3);
        assert_eq!(driver.due_ticks(start + Duration::from_millis(3900)), 0);
        assert_eq!(driver.due_ticks(start + Duration::from_millis(4500)), 1);
    }

    #[test]
    fn test_cancel_drops_pending_ticks() {
        let mut driver = TickDriver::new();
        let start = Instant::now();
        driver.arm_at(start);
        driver.cancel();

        assert!(!driver.is_armed());
        // A tick that was due before the cancel must not be delivered after it
        assert_eq!(driver.due_ticks(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_rearm_restarts_the_interval() {
        let mut driver = TickDriver::new();
        let start = Instant::now();
        driver.arm_at(start);
        driver.cancel();

        let resumed = start + Duration::from_secs(10);
        driver.arm_at(resumed);
        assert_eq!(driver.due_ticks(resumed + Duration::from_millis(500)), 0);
        assert_eq!(driver.due_ticks(resumed + Duration::from_secs(1)), 1);
    }
}
