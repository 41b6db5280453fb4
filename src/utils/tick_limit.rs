use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces a loop to a fixed number of ticks per second.
pub struct TickLimiter {
    target_ticktime: Duration,
    tick_timer: Instant,
    ticktime_smoothed: f64,
}

impl Default for TickLimiter {
    fn default() -> Self {
        Self {
            target_ticktime: Duration::ZERO,
            tick_timer: Instant::now(),
            ticktime_smoothed: 0.,
        }
    }
}

impl TickLimiter {
    pub fn new(ticks_per_second: f64) -> Self {
        let mut limiter = Self::default();
        limiter.set_ticks_per_second(ticks_per_second);
        limiter
    }

    /// Measured rate, smoothed over recent ticks.
    ///
    /// Before the first tick this is the target rate, or 0 if pacing is disabled.
    pub fn ticks_per_second(&self) -> f64 {
        if self.ticktime_smoothed > 0. {
            1. / self.ticktime_smoothed
        } else {
            0.
        }
    }

    /// Non-positive or non-finite rates disable pacing.
    pub fn set_ticks_per_second(&mut self, ticks_per_second: f64) {
        self.target_ticktime = if ticks_per_second.is_finite() && ticks_per_second > 0. {
            Duration::from_secs_f64(1. / ticks_per_second)
        } else {
            Duration::ZERO
        };
        self.ticktime_smoothed = self.target_ticktime.as_secs_f64();
    }

    pub fn target_ticktime(&self) -> Duration {
        self.target_ticktime
    }

    /// Sleeps until the next tick boundary.
    pub fn delay(&mut self) {
        let before_wait = self.tick_timer.elapsed();

        if self.target_ticktime > before_wait {
            sleep(self.target_ticktime - before_wait);
        }

        let after_wait = self.tick_timer.elapsed();
        let ticktime = after_wait.as_secs_f64();
        self.ticktime_smoothed += (ticktime - self.ticktime_smoothed) * 0.1;

        self.tick_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::TickLimiter;
    use std::time::{Duration, Instant};

    #[test]
    fn test_target() {
        assert_eq!(TickLimiter::new(10.).target_ticktime(), Duration::from_millis(100));
        assert_eq!(TickLimiter::new(0.).target_ticktime(), Duration::ZERO);
        assert_eq!(TickLimiter::new(f64::NAN).target_ticktime(), Duration::ZERO);
    }

    #[test]
    fn test_rate_before_first_tick() {
        let rate = TickLimiter::new(10.).ticks_per_second();
        assert!((rate - 10.).abs() < 1e-6, "rate={}", rate);
        assert_eq!(TickLimiter::new(0.).ticks_per_second(), 0.);
        assert_eq!(TickLimiter::default().ticks_per_second(), 0.);
    }

    #[test]
    fn test_delay_waits_for_boundary() {
        let mut limiter = TickLimiter::new(50.);
        let timer = Instant::now();
        limiter.delay();
        limiter.delay();
        assert!(timer.elapsed() >= Duration::from_millis(38));
        let rate = limiter.ticks_per_second();
        assert!(rate.is_finite() && rate > 0., "rate={}", rate);
    }
}
