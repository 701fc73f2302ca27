//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and `PowerShell`.

use crate::output::ExitCode;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use clex_cli::commands::completions;
///
/// let mut out = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut Command::new("clex"), &mut out);
/// assert!(!out.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    tracing::info!("Generating {shell} completions");
    generate_completions(shell, cmd, &mut io::stdout());
    ExitCode::SUCCESS
}
