//! Interactive key source using crossterm raw mode

use super::{InputError, KeySource};
use crossterm::{
    event::{self, Event, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use std::io::{stdout, Write};

/// What a terminal event means to the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Symbol(char),
    Newline,
    EndOfInput,
    Ignore,
}

fn classify(event: &Event) -> KeyAction {
    let Event::Key(CtKeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return KeyAction::Ignore;
    };

    // Windows also reports releases and repeats
    if *kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match code {
        CtKeyCode::Char('c' | 'd') if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::EndOfInput
        }
        CtKeyCode::Esc => KeyAction::EndOfInput,
        CtKeyCode::Enter => KeyAction::Newline,
        CtKeyCode::Char(c) if !c.is_whitespace() => KeyAction::Symbol(*c),
        _ => KeyAction::Ignore,
    }
}

/// Reads individual key presses from the terminal.
///
/// Raw mode is enabled for the lifetime of the source and restored on drop.
/// Typed characters are echoed. Esc, Ctrl-C and Ctrl-D end the input.
pub struct TerminalSource {
    _private: (),
}

impl TerminalSource {
    pub fn new() -> Result<Self, InputError> {
        enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }

    fn echo(text: &str) -> Result<(), InputError> {
        let mut out = stdout();
        execute!(out, Print(text))?;
        out.flush()?;
        Ok(())
    }
}

impl KeySource for TerminalSource {
    fn next_key(&mut self) -> Result<Option<char>, InputError> {
        loop {
            match classify(&event::read()?) {
                KeyAction::Symbol(c) => {
                    Self::echo(c.encode_utf8(&mut [0; 4]))?;
                    return Ok(Some(c));
                }
                KeyAction::Newline => Self::echo("\r\n")?,
                KeyAction::EndOfInput => return Ok(None),
                KeyAction::Ignore => {}
            }
        }
    }
}

impl Drop for TerminalSource {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
        let _ = Self::echo("\r\n");
    }
}
