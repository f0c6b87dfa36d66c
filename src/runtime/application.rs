//! End-to-end run of one script: arguments in, rendered lines out.
//!
//! [`run`] never prints or exits. It returns either the [`RunOutcome`] to print on
//! stdout or an [`ApplicationError`] whose [`ApplicationError::name`] and message
//! the binary writes to stderr as `<ErrorKind>: <message>`.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{debug, info, instrument};

use super::cli::{CliError, CliOptions, USAGE};
use super::display::render;
use crate::error::SimulationError;
use crate::parser::PlateauRoversParser;

/// Errors surfaced to the user by the binary.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {}. {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl ApplicationError {
    /// Kind name printed before the message.
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationError::Simulation(e) => e.name(),
            _ => "Error",
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

/// What a successful run wants printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--help` was requested.
    Help(&'static str),
    /// Rendered plateau, one entry per output line.
    Report(Vec<String>),
}

impl RunOutcome {
    pub fn lines(&self) -> Vec<String> {
        match self {
            RunOutcome::Help(text) => text.lines().map(str::to_string).collect(),
            RunOutcome::Report(lines) => lines.clone(),
        }
    }
}

/// Parses `args`, reads the script, runs it, and renders the final plateau.
#[instrument(skip_all)]
pub async fn run<I, S>(args: I) -> Result<RunOutcome, ApplicationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options = CliOptions::parse(args)?;
    if options.help {
        return Ok(RunOutcome::Help(USAGE));
    }
    debug!(?options, "Parsed arguments");

    let input = read_script(&options.file_path).await?;
    let plateau = PlateauRoversParser::new().parse(&input)?;
    info!(plateau = %plateau, "Simulation finished");

    Ok(RunOutcome::Report(render(&plateau, options.output_mode())))
}

async fn read_script(path: &Path) -> Result<String, ApplicationError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ApplicationError::FileNotFound(path.to_path_buf()))
        }
        Err(source) => Err(ApplicationError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_follow_their_kind() {
        let err = ApplicationError::from(CliError::MissingFilePath);
        assert_eq!(err.name(), "Error");
        assert_eq!(
            err.to_string(),
            "File path is required. Use --help for usage information."
        );

        let err = ApplicationError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(format!("{}: {}", err.name(), err), "Error: File not found: missing.txt");

        let err = ApplicationError::from(SimulationError::parser("bad", 3));
        assert_eq!(
            format!("{}: {}", err.name(), err),
            "ParserError: \"bad\" at line number: 3"
        );
    }

    #[tokio::test]
    async fn help_needs_no_file() {
        let outcome = run(["--help"]).await.unwrap();
        assert_eq!(outcome, RunOutcome::Help(USAGE));
        assert!(outcome.lines()[0].contains("Plateau Rovers"));
    }
}
