//! Process table ingestion.
//!
//! Reads whitespace-delimited process tables of the form
//!
//! ```text
//! PID  Arrival_Time  Burst_Time  Priority
//! 1    0             5           2
//! 2    1             3           1
//! ```
//!
//! The first line is a header and is skipped. Blank lines are ignored and
//! columns past the fourth are ignored. A malformed row is reported as a
//! [`LoadWarning`] and skipped; the rest of the table still loads.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::models::ProcessDescriptor;

/// Number of required columns per row.
const COLUMNS: usize = 4;

/// Outcome of parsing a process table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Successfully parsed descriptors, in file order.
    pub descriptors: Vec<ProcessDescriptor>,
    /// Rows that were skipped.
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// Whether every non-blank row parsed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A skipped row.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    /// 1-based line number in the source.
    pub line: usize,
    /// Warning category.
    pub kind: LoadWarningKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of row problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarningKind {
    /// Fewer than four columns.
    MissingColumns,
    /// A column is not an integer (or out of range).
    InvalidNumber,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Error reading a process table file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Parses a process table from text.
pub fn parse_descriptors(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        match parse_row(row) {
            Ok(descriptor) => report.descriptors.push(descriptor),
            Err((kind, message)) => {
                debug!("skipping line {line}: {message}");
                report.warnings.push(LoadWarning {
                    line,
                    kind,
                    message,
                });
            }
        }
    }

    report
}

/// Reads and parses a process table file.
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be read. Malformed rows are not
/// errors; they appear in [`LoadReport::warnings`].
pub fn load_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_descriptors(&text))
}

fn parse_row(row: &str) -> Result<ProcessDescriptor, (LoadWarningKind, String)> {
    let parts: Vec<&str> = row.split_whitespace().collect();
    if parts.len() < COLUMNS {
        return Err((
            LoadWarningKind::MissingColumns,
            format!("expected {COLUMNS} columns, found {}", parts.len()),
        ));
    }

    Ok(ProcessDescriptor {
        pid: parse_field(parts[0], "PID")?,
        arrival_time: parse_field(parts[1], "Arrival_Time")?,
        burst_time: parse_field(parts[2], "Burst_Time")?,
        priority: parse_field(parts[3], "Priority")?,
    })
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> Result<T, (LoadWarningKind, String)> {
    value.parse().map_err(|_| {
        (
            LoadWarningKind::InvalidNumber,
            format!("{column} '{value}' is not a valid integer"),
        )
    })
}
