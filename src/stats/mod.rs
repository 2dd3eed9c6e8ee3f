//! Delay statistics: collection, averaging and ranking

mod aggregate;
mod collector;
mod record;

pub use aggregate::{average_delays, rank_delays, RankedSeries};
pub use collector::{DelayCollector, DEFAULT_TERMINATOR};
pub use record::{DelayRecord, DelayTable};
