//! Command-line argument handling.

use std::path::PathBuf;

use thiserror::Error;

use super::display::OutputMode;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Plateau Rovers CLI

Usage:
  plateau-rovers <file-path> [--verbose]
  plateau-rovers --help

Arguments:
  file-path    Path to the rover script (mandatory)

Options:
  --help       Show this help message
  --verbose    Enable verbose output (show plateau info and rover prefixes)

Environment:
  RUST_LOG     Log filter for diagnostics on stderr (e.g. info, debug)";

/// Errors raised while reading the command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("File path is required. Use --help for usage information.")]
    MissingFilePath,
}

/// Options parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub file_path: PathBuf,
    pub help: bool,
    pub verbose: bool,
}

impl CliOptions {
    /// Parses arguments (without the program name).
    ///
    /// `--help` anywhere wins over everything else. The first argument that does
    /// not start with `-` is the file path; unknown flags are ignored.
    ///
    /// # Errors
    /// [`CliError::MissingFilePath`] when no file path was given and help was not requested.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if args.iter().any(|arg| arg == "--help") {
            return Ok(Self {
                help: true,
                ..Self::default()
            });
        }

        let verbose = args.iter().any(|arg| arg == "--verbose");
        let file_path = args
            .iter()
            .find(|arg| !arg.starts_with('-'))
            .ok_or(CliError::MissingFilePath)?;

        Ok(Self {
            file_path: PathBuf::from(file_path),
            help: false,
            verbose,
        })
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Compact
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_path() {
        let options = CliOptions::parse(["input.txt"]).unwrap();
        assert_eq!(options.file_path, PathBuf::from("input.txt"));
        assert!(!options.verbose);
        assert!(!options.help);
        assert_eq!(options.output_mode(), OutputMode::Compact);
    }

    #[test]
    fn parses_verbose_flag_in_any_position() {
        for args in [["input.txt", "--verbose"], ["--verbose", "input.txt"]] {
            let options = CliOptions::parse(args).unwrap();
            assert_eq!(options.file_path, PathBuf::from("input.txt"));
            assert!(options.verbose);
            assert_eq!(options.output_mode(), OutputMode::Verbose);
        }
    }

    #[test]
    fn help_short_circuits_everything() {
        let options = CliOptions::parse(["input.txt", "--verbose", "--help"]).unwrap();
        assert!(options.help);
        assert!(!options.verbose);

        let options = CliOptions::parse(["--help"]).unwrap();
        assert!(options.help);
    }

    #[test]
    fn missing_file_path_is_an_error() {
        assert_eq!(
            CliOptions::parse(Vec::<String>::new()),
            Err(CliError::MissingFilePath)
        );
        assert_eq!(CliOptions::parse(["--verbose"]), Err(CliError::MissingFilePath));
        assert_eq!(
            CliError::MissingFilePath.to_string(),
            "File path is required. Use --help for usage information."
        );
    }

    #[test]
    fn first_non_flag_argument_is_the_file() {
        let options = CliOptions::parse(["--verbose", "first.txt", "second.txt"]).unwrap();
        assert_eq!(options.file_path, PathBuf::from("first.txt"));
    }
}
