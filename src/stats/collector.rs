//! Delay collection from a key source

use super::DelayTable;
use crate::input::{Clock, InputError, KeySource, SystemClock};
use log::{debug, trace};

/// Character that ends collection unless configured otherwise
pub const DEFAULT_TERMINATOR: char = '.';

/// Reads characters until the terminator and records the wait before each
pub struct DelayCollector<C: Clock = SystemClock> {
    terminator: char,
    clock: C,
}

impl DelayCollector<SystemClock> {
    pub fn new(terminator: char) -> Self {
        Self::with_clock(terminator, SystemClock)
    }
}

impl<C: Clock> DelayCollector<C> {
    pub fn with_clock(terminator: char, clock: C) -> Self {
        Self { terminator, clock }
    }

    /// Collect delays until the terminator or end of input.
    ///
    /// The wait before the terminator itself is not recorded.
    pub fn collect<S: KeySource>(&mut self, source: &mut S) -> Result<DelayTable, InputError> {
        let mut table = DelayTable::new();

        loop {
            let start = self.clock.now();
            let Some(symbol) = source.next_key()? else {
                debug!("End of input after {} characters", table.total_count());
                break;
            };
            let end = self.clock.now();

            if symbol == self.terminator {
                debug!("Terminator seen after {} characters", table.total_count());
                break;
            }

            let delay_ms = end.saturating_duration_since(start).as_millis() as u64;
            trace!("{:?} after {} ms", symbol, delay_ms);
            table.record(symbol, delay_ms);
        }

        Ok(table)
    }
}
