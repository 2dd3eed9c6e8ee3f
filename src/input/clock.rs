//! Time sources for delay measurement

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of timestamps for the collector
pub trait Clock {
    fn now(&mut self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

/// Clock that replays scripted timestamps.
///
/// Each call to [`Clock::now`] returns the next scripted instant. Once the
/// script runs out the last instant is repeated, so further reads measure a
/// zero delay.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Instant,
    ticks: VecDeque<Instant>,
}

impl ManualClock {
    /// Script a clock so that consecutive start/end pairs are `delays_ms` apart.
    ///
    /// The collector reads the clock twice per character, so the n-th delay
    /// becomes the wait measured before the n-th character.
    pub fn from_delays(delays_ms: &[u64]) -> Self {
        let base = Instant::now();
        let mut elapsed = Duration::ZERO;
        let mut ticks = VecDeque::with_capacity(delays_ms.len() * 2);

        for &delay in delays_ms {
            ticks.push_back(base + elapsed);
            elapsed += Duration::from_millis(delay);
            ticks.push_back(base + elapsed);
        }

        Self {
            current: base,
            ticks,
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::from_delays(&[])
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Instant {
        if let Some(tick) = self.ticks.pop_front() {
            self.current = tick;
        }
        self.current
    }
}
