//! Blink timing
//!
//! Each visual channel (panel, map trace, label outline) owns one timer so
//! the channels can blink at independent intervals.

use std::time::Duration;

/// Periodic boolean toggle for one visual channel.
#[derive(Debug, Clone)]
pub struct BlinkTimer {
    since_toggle: Duration,
    visible: bool,
}

impl BlinkTimer {
    /// Starts visible, so a channel shows during its first interval.
    pub fn new() -> Self {
        Self {
            since_toggle: Duration::ZERO,
            visible: true,
        }
    }

    /// Advance the timer by `dt`. Once the accumulated time reaches
    /// `interval`, visibility flips and the timer resets to zero; otherwise
    /// the state is unchanged. Returns the current visibility.
    pub fn advance(&mut self, dt: Duration, interval: Duration) -> bool {
        self.since_toggle += dt;
        if self.since_toggle >= interval {
            self.since_toggle = Duration::ZERO;
            self.visible = !self.visible;
        }
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Default for BlinkTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(250);

    #[test]
    fn test_flips_and_resets_when_interval_elapsed() {
        let mut timer = BlinkTimer::new();
        assert!(timer.visible());

        // 260ms >= 250ms: flip, elapsed resets to zero
        assert!(!timer.advance(Duration::from_millis(260), INTERVAL));
        // The reset means the next 100ms do not flip again
        assert!(!timer.advance(Duration::from_millis(100), INTERVAL));
        // ...but 150 more reach the interval exactly
        assert!(timer.advance(Duration::from_millis(150), INTERVAL));
    }

    #[test]
    fn test_below_interval_is_unchanged() {
        let mut timer = BlinkTimer::new();
        assert!(timer.advance(Duration::from_millis(100), INTERVAL));
        assert!(timer.advance(Duration::from_millis(100), INTERVAL));
        assert!(timer.visible());
    }

    #[test]
    fn test_channels_are_independent() {
        let mut fast = BlinkTimer::new();
        let mut slow = BlinkTimer::new();
        let dt = Duration::from_millis(100);

        fast.advance(dt, Duration::from_millis(100));
        slow.advance(dt, Duration::from_millis(1000));

        assert!(!fast.visible());
        assert!(slow.visible());
    }
}
