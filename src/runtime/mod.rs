//! Runtime plumbing around the simulation core.
//!
//! This module contains everything the binary needs that is not rover logic:
//!
//! - **Argument handling**: [`CliOptions`] and the usage text
//! - **Running a script**: [`run`] reads the file, parses it, and renders the result
//! - **Output rendering**: [`render`] in compact or verbose [`OutputMode`]
//! - **Observability setup**: [`setup_tracing`]

pub mod application;
pub mod cli;
pub mod display;
pub mod tracing;

pub use application::*;
pub use cli::*;
pub use display::*;
pub use self::tracing::*;
