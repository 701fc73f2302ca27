//! Output format selection and process exit codes.
//!
//! # Examples
//!
//! ```
//! use clex_cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
//! assert_eq!(ExitCode::NOT_FOUND.as_i32(), 3);
//! ```

use clex_files::FilesError;
use std::fmt;
use std::io;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while interpreting command-line input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Unknown `--format` value.
    #[error("invalid output format: {0} (expected json, text or pretty)")]
    InvalidFormat(String),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON for machine parsing
    Json,
    /// Tab-separated lines for scripts
    Text,
    /// Coloured, human-readable output
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

/// Process exit code with semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// Unclassified failure (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid path or argument (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Requested entry does not exist (exit code 3).
    pub const NOT_FOUND: Self = Self(3);

    /// Any other I/O failure (exit code 4).
    pub const IO_ERROR: Self = Self(4);

    /// Creates an exit code from a raw value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw exit code value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for [`ExitCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Classifies a command failure.
    ///
    /// The first [`FilesError`] in the error chain decides the code; errors
    /// without one map to [`ExitCode::ERROR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_cli::ExitCode;
    ///
    /// let err = anyhow::anyhow!("something else");
    /// assert_eq!(ExitCode::from_error(&err), ExitCode::ERROR);
    /// ```
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let Some(files_error) = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<FilesError>())
        else {
            return if err.chain().any(|cause| cause.is::<CliError>()) {
                Self::INVALID_INPUT
            } else {
                Self::ERROR
            };
        };

        if files_error.is_not_found() {
            Self::NOT_FOUND
        } else if files_error.is_invalid_path()
            || files_error
                .io_error()
                .is_some_and(|e| e.kind() == io::ErrorKind::InvalidInput)
        {
            Self::INVALID_INPUT
        } else {
            Self::IO_ERROR
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
