//! Output formatting for focuswave.
//!
//! This module provides formatters for displaying tracker data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::{FocusReport, SessionRecord, TitleTier};

pub use json::*;
pub use pretty::*;

/// Format day records based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_history(
    records: &[&SessionRecord],
    format: OutputFormat,
) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format the streak summary based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_streak(report: &FocusReport, format: OutputFormat) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_streak_pretty(report)),
        OutputFormat::Json => format_streak_json(report),
    }
}

/// Format the title table based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_titles(current: TitleTier, format: OutputFormat) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_titles_pretty(current)),
        OutputFormat::Json => format_titles_json(current),
    }
}
