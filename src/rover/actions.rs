//! Commands a rover can execute.
//!
//! This module defines the closed set of operations read from a script's commands
//! line. They are dispatched by [`Rover::execute`](crate::rover::Rover::execute).

use std::fmt;

/// Direction of a 90 degree turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// A single rover command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn 90 degrees to the left (`L`).
    RotateLeft,
    /// Turn 90 degrees to the right (`R`).
    RotateRight,
    /// Move one cell forward in the current facing (`M`).
    Move,
}

impl Command {
    /// Every valid command, in the order listed in diagnostics.
    pub const ALL: [Command; 3] = [Command::RotateLeft, Command::RotateRight, Command::Move];

    pub fn letter(self) -> char {
        match self {
            Command::RotateLeft => 'L',
            Command::RotateRight => 'R',
            Command::Move => 'M',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Maps a command letter, in either case, onto its [`Command`].
///
/// # Errors
/// Returns the offending character when it is not one of `L`, `R`, `M`.
impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Command::RotateLeft),
            'R' => Ok(Command::RotateRight),
            'M' => Ok(Command::Move),
            _ => Err(c),
        }
    }
}
