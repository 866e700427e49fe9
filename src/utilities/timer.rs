use std::time::{Duration, Instant};

/// Countdown over wall-clock time. Remaining seconds are recomputed from the
/// start instant on every tick, so a stalled UI catches up instead of drifting.
pub struct CountdownTimer {
    started_at: Instant,
    duration: Duration,
    remaining_secs: u64,
    expiry_signaled: bool,
}

impl CountdownTimer {
    pub fn new(seconds: u64) -> Self {
        let mut timer = Self {
            started_at: Instant::now(),
            duration: Duration::ZERO,
            remaining_secs: 0,
            expiry_signaled: false,
        };
        timer.set_duration(seconds);
        timer
    }

    pub fn set_duration(&mut self, seconds: u64) {
        self.set_duration_at(seconds, Instant::now());
    }

    pub fn set_duration_at(&mut self, seconds: u64, now: Instant) {
        self.started_at = now;
        self.duration = Duration::from_secs(seconds);
        self.remaining_secs = self.remaining_at(now);
        self.expiry_signaled = false;
    }

    /// Recomputes the remaining time. Returns true exactly once per crossing
    /// from running to expired; later ticks while expired stay false until the
    /// duration is set again.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.remaining_secs = self.remaining_at(now);
        if self.remaining_secs == 0 && !self.expiry_signaled {
            self.expiry_signaled = true;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    // ceil(left / 1s), so a countdown shows "1" until the final instant.
    fn remaining_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let left = self.duration.saturating_sub(elapsed);
        left.as_millis().div_ceil(1000) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_with_ceiling() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(10);
        timer.set_duration_at(10, t0);
        assert_eq!(timer.remaining(), 10);

        timer.tick_at(t0 + Duration::from_secs(3));
        assert_eq!(timer.remaining(), 7);

        // partial seconds round up
        timer.tick_at(t0 + Duration::from_millis(9500));
        assert_eq!(timer.remaining(), 1);

        assert!(timer.tick_at(t0 + Duration::from_secs(10)));
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn remaining_is_monotonic_and_never_negative() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(10);
        timer.set_duration_at(10, t0);

        let mut last = timer.remaining();
        for ms in (0u64..=12_000).step_by(250) {
            timer.tick_at(t0 + Duration::from_millis(ms));
            assert!(timer.remaining() <= last);
            last = timer.remaining();
        }
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(10);
        timer.set_duration_at(0, t0);
        assert_eq!(timer.remaining(), 0);
        assert!(timer.is_expired());

        assert!(timer.tick_at(t0));
        assert!(!timer.tick_at(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn expiry_fires_once_per_crossing() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(10);
        timer.set_duration_at(2, t0);

        assert!(!timer.tick_at(t0 + Duration::from_secs(1)));
        assert!(timer.tick_at(t0 + Duration::from_secs(2)));
        assert!(!timer.tick_at(t0 + Duration::from_secs(3)));
        assert!(!timer.tick_at(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn setting_a_new_duration_rearms_expiry() {
        let t0 = Instant::now();
        let mut timer = CountdownTimer::new(10);
        timer.set_duration_at(1, t0);
        assert!(timer.tick_at(t0 + Duration::from_secs(1)));

        let t1 = t0 + Duration::from_secs(5);
        timer.set_duration_at(3, t1);
        assert_eq!(timer.remaining(), 3);
        assert!(!timer.is_expired());
        assert!(timer.tick_at(t1 + Duration::from_secs(3)));
    }
}
