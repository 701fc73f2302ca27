//! Library half of the `clex` command-line tool.
//!
//! The binary is a thin shell over these modules so argument parsing,
//! command execution and output formatting can be tested without spawning
//! a process.

#![allow(clippy::format_push_string)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{ExitCode, OutputFormat};
