use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

/// Where the game loop gets its keypresses from.
pub trait InputSource {
    /// Returns the next command if one is waiting. Never blocks.
    fn poll_command(&mut self) -> Result<Option<Command>>;
}

/// Reads keys from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(&key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed list of commands, one per poll, then reports nothing.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Option<Command>>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Option<Command>>>(script: I) -> Self {
        ScriptedInput { queue: script.into_iter().collect() }
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_command(&mut self) -> Result<Option<Command>> {
        Ok(self.queue.pop_front().flatten())
    }
}

pub fn map_key(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
