//! Character input sources and timing

mod clock;
mod reader;
mod terminal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use reader::ReaderSource;
pub use terminal::TerminalSource;

use thiserror::Error;

/// Errors raised while reading characters
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// A blocking source of single characters.
///
/// Sources never yield whitespace. `Ok(None)` marks the end of input.
pub trait KeySource {
    /// Block until the next character is available
    fn next_key(&mut self) -> Result<Option<char>, InputError>;
}
