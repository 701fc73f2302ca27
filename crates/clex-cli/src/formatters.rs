//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text, and pretty output modes.

use crate::output::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Utc};
use clex_files::FileInfo;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Result types that know how to print themselves in every [`OutputFormat`].
///
/// JSON comes from the `Serialize` impl; text and pretty are per type.
pub trait Render: Serialize {
    /// Tab-separated lines, one record per line, no colours.
    fn text(&self) -> String;

    /// Coloured, aligned output for terminals.
    fn pretty(&self) -> String;
}

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use clex_cli::OutputFormat;
/// use clex_cli::formatters::format_output;
/// use clex_files::FileInfo;
///
/// let info = FileInfo::file("test", 12);
///
/// let output = format_output(&info, OutputFormat::Json)?;
/// assert!(output.contains("\"name\": \"test\""));
///
/// let output = format_output(&info, OutputFormat::Text)?;
/// assert!(output.starts_with("test\tfile\t12\t"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Render>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => Ok(data.text()),
        OutputFormat::Pretty => Ok(data.pretty()),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON.
    ///
    /// Uses pretty-printing with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

/// Entries of one directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    /// Path as given on the command line
    pub path: String,
    /// Entries in source order
    pub entries: Vec<FileInfo>,
}

/// Summary of a completed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    /// Source path inside the root
    pub src: String,
    /// Destination on the local file system
    pub dst: PathBuf,
    /// Size of the destination after the copy
    pub bytes: u64,
}

impl Render for FileInfo {
    fn text(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.name(),
            kind(self),
            self.size(),
            self.modified()
                .map_or_else(|| "-".to_string(), |t| t.to_rfc3339())
        )
    }

    fn pretty(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:>10} {}\n", "name:".bold(), self.name()));
        out.push_str(&format!("{:>10} {}\n", "kind:".bold(), kind(self).cyan()));
        out.push_str(&format!(
            "{:>10} {}\n",
            "size:".bold(),
            human_size(self.size()).yellow()
        ));
        out.push_str(&format!(
            "{:>10} {}\n",
            "modified:".bold(),
            format_time(self.modified())
        ));
        out.push_str(&format!(
            "{:>10} {}",
            "readonly:".bold(),
            self.readonly()
        ));
        out
    }
}

impl Render for Listing {
    fn text(&self) -> String {
        self.entries
            .iter()
            .map(Render::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn pretty(&self) -> String {
        if self.entries.is_empty() {
            return format!("{} is empty", self.path.bold()).dimmed().to_string();
        }

        let mut out = String::new();
        for entry in &self.entries {
            let name = if entry.is_dir() {
                format!("{}/", entry.name()).blue().bold().to_string()
            } else {
                entry.name().to_string()
            };
            out.push_str(&format!(
                "{:>9}  {}  {}\n",
                human_size(entry.size()).yellow(),
                format_time(entry.modified()),
                name
            ));
        }
        out.push_str(
            &format!("{} entries", self.entries.len())
                .dimmed()
                .to_string(),
        );
        out
    }
}

impl Render for CopyReport {
    fn text(&self) -> String {
        format!("{}\t{}\t{}", self.src, self.dst.display(), self.bytes)
    }

    fn pretty(&self) -> String {
        format!(
            "{} {} {} {} ({})",
            "copied".green().bold(),
            self.src,
            "->".dimmed(),
            self.dst.display(),
            human_size(self.bytes).yellow()
        )
    }
}

const fn kind(info: &FileInfo) -> &'static str {
    if info.is_dir() { "dir" } else { "file" }
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(
        || "-".dimmed().to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// Byte count with a binary unit suffix, e.g. `1.5 KiB`.
#[allow(clippy::cast_precision_loss)]
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
