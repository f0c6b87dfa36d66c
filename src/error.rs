//! # Simulation Errors
//!
//! This module defines the error type shared by the domain model and the parser.
//! Every failure in the core surfaces as a [`SimulationError`] and propagates to the
//! caller unmodified; nothing inside the crate catches or retries.

use thiserror::Error;

/// Errors that can occur while building or driving a plateau.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// A plateau or rover was constructed, or a rover placed, in violation of a
    /// static invariant (negative bounds, off-plateau placement, occupied cell).
    #[error("{0}")]
    InvalidInitialization(String),

    /// A move targeted a cell outside the plateau or one held by another rover.
    #[error("{0}")]
    InvalidCommand(String),

    /// The script is structurally or lexically malformed.
    #[error("\"{message}\" at line number: {line}")]
    Parser { message: String, line: usize },
}

impl SimulationError {
    pub(crate) fn parser(message: impl Into<String>, line: usize) -> Self {
        SimulationError::Parser {
            message: message.into(),
            line,
        }
    }

    /// The kind name printed in front of the message by the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            SimulationError::InvalidInitialization(_) => "InvalidInitializationError",
            SimulationError::InvalidCommand(_) => "InvalidCommandError",
            SimulationError::Parser { .. } => "ParserError",
        }
    }

    /// The 1-based script line a parser error was detected on.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            SimulationError::Parser { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience alias used across the core.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_error_formats_message_with_line() {
        let err = SimulationError::parser("Plateau boundary must contain valid numbers", 1);
        assert_eq!(
            err.to_string(),
            "\"Plateau boundary must contain valid numbers\" at line number: 1"
        );
        assert_eq!(err.line_number(), Some(1));
        assert_eq!(err.name(), "ParserError");
    }

    #[test]
    fn domain_errors_display_bare_message() {
        let err = SimulationError::InvalidCommand("blocked".into());
        assert_eq!(err.to_string(), "blocked");
        assert_eq!(err.line_number(), None);
        assert_eq!(err.name(), "InvalidCommandError");
    }
}
