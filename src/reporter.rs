//! Report formatting and printing utilities.
//!
//! This module is separate from the scanning logic to allow findvue
//! to be used as a library without printing side effects.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{config::OutputFormat, report::Report};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// File marker preceding each reported path
pub const FILE_MARK: &str = "\u{1F4C4}"; // 📄

/// Printed when no file has any hit.
pub const NO_FINDINGS_MESSAGE: &str = "No Vue-like usage found in Blade templates (after filters).";

/// Width the `[kind]` column is padded to.
const KIND_COLUMN_WIDTH: usize = 18;

/// Print the report to stdout in the requested format.
pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let written = match format {
        OutputFormat::Text => write_text(report, &mut stdout),
        OutputFormat::Json => write_json(report, &mut stdout),
    };
    written.context("Failed to write report")
}

/// Human-readable report: one block per file, then a summary line.
pub fn write_text<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            NO_FINDINGS_MESSAGE.green()
        );
    }

    for file in &report.files {
        writeln!(writer, "{} {}", FILE_MARK, file.path.bold())?;
        for hit in &file.hits {
            let kind = format!(
                "{:<width$}",
                format!("[{}]", hit.kind),
                width = KIND_COLUMN_WIDTH
            );
            writeln!(
                writer,
                "  Line {}: {} {}",
                hit.line.to_string().blue(),
                kind.cyan(),
                hit.detail
            )?;
        }
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Scan complete. {} hits across {} files.",
        report.total_hits, report.total_files
    )
}

/// Machine-readable report.
pub fn write_json<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

/// Print a warning about files that could not be read.
///
/// This is shown at the end of a run when files were skipped.
pub fn print_skipped_warning(skipped_count: usize, verbose: bool) {
    if skipped_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped_count,
            "-v".cyan()
        );
    }
}
