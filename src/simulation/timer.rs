//! Fixed-interval tick scheduling
//!
//! Wall time is fed in as frame deltas; the timer converts it into a single
//! delayed start event followed by evenly spaced ticks.

use std::time::Duration;

/// Events produced by one [`TickTimer::advance`] call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerEvents {
    /// The start delay elapsed during this advance
    pub start: bool,
    /// Number of whole intervals that elapsed after start
    pub ticks: u32,
}

#[derive(Clone, Debug)]
pub struct TickTimer {
    start_delay: Duration,
    interval: Duration,
    /// Time since creation, only tracked until start fires
    waited: Duration,
    /// Time carried toward the next tick
    accumulator: Duration,
    started: bool,
}

impl TickTimer {
    pub fn new(start_delay: Duration, interval: Duration) -> Self {
        Self {
            start_delay,
            interval,
            waited: Duration::ZERO,
            accumulator: Duration::ZERO,
            started: false,
        }
    }

    pub fn from_secs(start_delay: f64, interval: f64) -> Self {
        Self::new(
            Duration::from_secs_f64(start_delay.max(0.0)),
            Duration::from_secs_f64(interval.max(0.0)),
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Advance by `dt` of wall time
    pub fn advance(&mut self, dt: Duration) -> TimerEvents {
        let mut events = TimerEvents::default();

        if self.started {
            self.accumulator += dt;
        } else {
            self.waited += dt;
            if self.waited < self.start_delay {
                return events;
            }
            events.start = true;
            self.started = true;
            self.accumulator = self.waited - self.start_delay;
        }

        if self.interval.is_zero() {
            return events;
        }
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            events.ticks += 1;
        }
        events
    }

    /// Time left until the next start or tick event
    pub fn until_next_event(&self) -> Duration {
        if self.started {
            self.interval.saturating_sub(self.accumulator)
        } else {
            self.start_delay.saturating_sub(self.waited)
        }
    }

    /// Begin ticking from now, skipping any remaining start delay
    pub fn restart(&mut self) {
        self.started = true;
        self.accumulator = Duration::ZERO;
    }

    /// Return to the initial waiting state
    pub fn reset(&mut self) {
        self.waited = Duration::ZERO;
        self.accumulator = Duration::ZERO;
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_start_fires_once_after_delay() {
        let mut timer = TickTimer::new(ms(1000), ms(1000));
        assert_eq!(timer.advance(ms(400)), TimerEvents::default());
        assert_eq!(timer.advance(ms(400)), TimerEvents::default());

        let events = timer.advance(ms(200));
        assert!(events.start);
        assert_eq!(events.ticks, 0);
        assert!(timer.has_started());

        let events = timer.advance(ms(500));
        assert!(!events.start);
    }

    #[test]
    fn test_one_tick_per_interval() {
        let mut timer = TickTimer::new(ms(0), ms(1000));
        assert!(timer.advance(ms(0)).start);

        let mut total = 0;
        for _ in 0..50 {
            total += timer.advance(ms(100)).ticks;
        }
        assert_eq!(total, 5);
    }

    #[test]
    fn test_start_leftover_counts_toward_ticks() {
        let mut timer = TickTimer::new(ms(1000), ms(1000));
        let events = timer.advance(ms(2500));
        assert!(events.start);
        assert_eq!(events.ticks, 1);
        assert_eq!(timer.until_next_event(), ms(500));
    }

    #[test]
    fn test_until_next_event() {
        let mut timer = TickTimer::new(ms(1000), ms(250));
        timer.advance(ms(300));
        assert_eq!(timer.until_next_event(), ms(700));

        timer.advance(ms(700));
        assert_eq!(timer.until_next_event(), ms(250));
    }

    #[test]
    fn test_restart_and_reset() {
        let mut timer = TickTimer::new(ms(1000), ms(1000));
        timer.restart();
        assert!(timer.has_started());
        assert_eq!(timer.advance(ms(1000)).ticks, 1);

        timer.reset();
        assert!(!timer.has_started());
        assert_eq!(timer.until_next_event(), ms(1000));
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut timer = TickTimer::new(ms(0), Duration::ZERO);
        let events = timer.advance(ms(100));
        assert!(events.start);
        assert_eq!(events.ticks, 0);
    }
}
