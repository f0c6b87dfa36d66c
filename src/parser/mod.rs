//! # Script Parser & Interpreter
//!
//! Turns the raw text of a rover script into a fully driven [`Plateau`].
//!
//! ## Format
//!
//! ```text
//! <maxX> <maxY>
//! <x> <y> <direction>
//! <commands>
//! [<x> <y> <direction>
//! <commands>]...
//! ```
//!
//! ## Processing
//!
//! A leading byte order mark is dropped. The whole input is then trimmed, split
//! into lines, and each line trimmed. The first line builds the plateau; every
//! following pair of lines places one rover and replays its commands before the
//! next pair is read. Rover pairs are positional: blank lines inside the script
//! are not skipped.
//!
//! Every [`SimulationError::Parser`] carries the 1-based number of the line being
//! validated. Domain errors raised by [`Plateau`] and [`Rover`] propagate as-is.

use tracing::{debug, info, instrument};

use crate::domain::{Direction, Position};
use crate::error::{Result, SimulationError};
use crate::plateau::Plateau;
use crate::rover::{Command, Rover};

/// Id given to the plateau built from a script.
const PLATEAU_ID: &str = "1";

/// Parses `input` and runs every rover's commands, returning the final plateau.
///
/// Shorthand for [`PlateauRoversParser::new`] followed by
/// [`PlateauRoversParser::parse`].
pub fn parse(input: &str) -> Result<Plateau> {
    PlateauRoversParser::new().parse(input)
}

/// Single-pass, line-oriented script interpreter.
///
/// The parser tracks the current line so that every error names the line it was
/// raised on. It can be reused; each call to [`parse`](Self::parse) starts over.
#[derive(Debug, Default)]
pub struct PlateauRoversParser {
    current_line: usize,
}

impl PlateauRoversParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line number of the most recently consumed line (1-based, 0 before parsing).
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    #[instrument(skip_all)]
    pub fn parse(&mut self, input: &str) -> Result<Plateau> {
        let input = input.trim_start_matches('\u{FEFF}').trim();
        let lines: Vec<&str> = input.split('\n').map(str::trim).collect();

        self.current_line = 1;
        let mut plateau = self.parse_plateau(lines[0])?;
        info!(max_x = plateau.max_x(), max_y = plateau.max_y(), "Plateau built");

        // Every rover takes two lines: position, then commands.
        for (pair, i) in (1..lines.len()).step_by(2).enumerate() {
            let index = pair + 1;

            self.current_line += 1;
            let rover = self.parse_rover(lines[i], index)?;
            let rover_id = rover.id().to_string();
            plateau.add_rover(rover)?;

            self.current_line += 1;
            let commands_line = lines.get(i + 1).copied().unwrap_or_default();
            let commands = self.parse_rover_commands(commands_line, index)?;

            debug!(rover_id = %rover_id, count = commands.len(), "Replaying commands");
            for command in commands {
                plateau.command_rover(&rover_id, command)?;
            }
        }

        info!(rovers = plateau.rover_count(), "Script complete");
        Ok(plateau)
    }

    fn error(&self, message: impl Into<String>) -> SimulationError {
        SimulationError::parser(message, self.current_line)
    }

    fn validate_non_empty(&self, line: &str, prefix: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Err(self.error(format!("{prefix} line is mandatory and cannot be empty")));
        }
        Ok(())
    }

    fn parse_plateau(&self, line: &str) -> Result<Plateau> {
        self.validate_non_empty(line, "Plateau")?;

        let parts: Vec<&str> = line.split_whitespace().collect();
        let &[max_x, max_y] = parts.as_slice() else {
            return Err(self.error("Plateau boundary must contain exactly two numbers"));
        };

        let (Some(max_x), Some(max_y)) = (parse_number(max_x), parse_number(max_y)) else {
            return Err(self.error("Plateau boundary must contain valid numbers"));
        };

        Plateau::from_numbers(PLATEAU_ID, max_x, max_y)
    }

    fn parse_rover(&self, line: &str, index: usize) -> Result<Rover> {
        self.validate_non_empty(line, &format!("Rover {index} position"))?;

        let parts: Vec<&str> = line.split_whitespace().collect();
        let &[x, y, direction] = parts.as_slice() else {
            return Err(self.error(format!(
                "Rover {index} position must contain exactly three values (x y direction)"
            )));
        };

        let (Some(x), Some(y)) = (parse_leading_integer(x), parse_leading_integer(y)) else {
            return Err(self.error(format!("Rover {index} coordinates must be valid numbers")));
        };

        let Ok(direction) = direction.parse::<Direction>() else {
            let valid: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
            return Err(self.error(format!(
                "Rover {index} direction must be one of: {}",
                valid.join(", ")
            )));
        };

        Rover::new(index.to_string(), Position::new(x, y), direction)
    }

    fn parse_rover_commands(&self, line: &str, index: usize) -> Result<Vec<Command>> {
        self.validate_non_empty(line, &format!("Rover {index} commands"))?;

        line.chars()
            .map(|c| {
                Command::try_from(c).map_err(|invalid| {
                    let valid: Vec<String> = Command::ALL.iter().map(|c| c.to_string()).collect();
                    self.error(format!(
                        "Rover {index} has invalid command '{}'. Valid commands are: {}",
                        invalid.to_uppercase(),
                        valid.join(", ")
                    ))
                })
            })
            .collect()
    }
}

/// Reads a plateau bound as a number literal: decimal with optional sign, fraction
/// and exponent, unsigned `0x`/`0o`/`0b` integers, or a signed `Infinity`.
/// Integrality is checked by [`Plateau::from_numbers`].
fn parse_number(token: &str) -> Option<f64> {
    match token {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some((radix, digits)) = radix_literal(token) {
        return fold_digits(digits, radix);
    }

    // `f64::from_str` also takes "inf" and "NaN", which are not numbers here.
    if !token.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }
    token.parse::<f64>().ok()
}

fn radix_literal(token: &str) -> Option<(u32, &str)> {
    let radix = match token.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &token[2..]))
}

fn fold_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Reads the leading integer of `token`: an optional sign, then either a `0x`
/// prefix and hex digits or plain decimal digits. Anything after the digits is
/// ignored, so `"3abc"` reads as 3 and `"0x1G"` as 1.
fn parse_leading_integer(token: &str) -> Option<i64> {
    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits = body.len() - body.trim_start_matches(|c: char| c.is_digit(radix)).len();
    if digits == 0 {
        return None;
    }
    let value = i64::from_str_radix(&body[..digits], radix).ok()?;
    Some(if negative { -value } else { value })
}
