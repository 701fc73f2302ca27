//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// clex - copy, list and stat files from a read-only directory.
///
/// Every path argument except the copy destination is resolved inside
/// `--root`; `..` segments never leave it.
#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Directory served as the read-only source
    #[arg(long, global = true, env = "CLEX_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long, global = true, env = "CLEX_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a file out of the source onto the local file system.
    ///
    /// # Examples
    ///
    /// ```bash
    /// clex --root ./testdata cp test /tmp/test
    /// ```
    Cp {
        /// Source path, inside `--root`
        src: String,

        /// Destination path on the local file system (created or truncated)
        dst: PathBuf,
    },

    /// List the entries of a directory.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Every entry of the root
    /// clex ls
    ///
    /// # First two entries of a subdirectory
    /// clex ls nested -n 2
    /// ```
    Ls {
        /// Directory path, inside `--root`
        #[arg(default_value = ".")]
        path: String,

        /// Maximum number of entries; zero or negative lists everything
        #[arg(short = 'n', long, default_value_t = 0, allow_negative_numbers = true)]
        count: isize,
    },

    /// Show metadata for a file or directory.
    Stat {
        /// Path, inside `--root`
        path: String,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// clex completions bash > /etc/bash_completion.d/clex
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
