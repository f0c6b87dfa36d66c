//! # Plateau Rovers
//!
//! > **Rovers on a bounded grid, driven by a text script.**
//!
//! This crate parses a small line-oriented script describing a rectangular plateau,
//! a starting pose for each rover, and a string of commands per rover. It replays
//! the commands one rover at a time, enforcing boundaries and collisions, and
//! reports where every rover ends up.
//!
//! ## 🚀 Core Concepts
//!
//! ### Entities own their invariants
//! - A [`Plateau`](plateau::Plateau) rejects negative bounds and refuses rovers
//!   placed off-grid or onto an occupied cell.
//! - A [`Rover`](rover::Rover) rejects negative coordinates. It never stores a
//!   reference to its plateau; validated moves take the plateau as an argument.
//!
//! ### Closed command set
//! Commands are the [`Command`](rover::Command) enum (`L`, `R`, `M`) and are
//! dispatched with an exhaustive `match`, so there is no way to run an unknown one.
//!
//! ### Errors
//! Everything in the core fails with [`SimulationError`](error::SimulationError):
//! `InvalidInitialization`, `InvalidCommand`, or `Parser` (which carries the
//! 1-based script line). Errors are never caught inside the crate.
//!
//! ## 🗺️ Module Tour
//!
//! - [`domain`]: `Position` and `Direction` value types.
//! - [`rover`]: the rover entity and its commands.
//! - [`plateau`]: the grid and its rover registry.
//! - [`parser`]: script → driven plateau.
//! - [`runtime`]: CLI options, file reading, output rendering, tracing setup.
//!
//! ## 📚 Quick Start
//!
//! ```
//! let plateau = plateau_rovers::parser::parse("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM")?;
//! let ends: Vec<String> = plateau.rovers().iter().map(|r| r.to_string()).collect();
//! assert_eq!(ends, ["1 3 N", "5 1 E"]);
//! # Ok::<(), plateau_rovers::error::SimulationError>(())
//! ```
//!
//! ### Running the CLI
//!
//! ```bash
//! RUST_LOG=info cargo run -- input.txt --verbose
//! ```

pub mod domain;
pub mod error;
pub mod parser;
pub mod plateau;
pub mod rover;
pub mod runtime;
