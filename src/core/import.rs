//! Bulk import of the plain comma-separated movie format.
//!
//! One record per line: `title, genre, year, rating, duration, available`.
//! Malformed lines are skipped and only counted; a source that cannot be
//! read aborts the whole import.

use crate::domain::model::{Movie, MovieValidationError};
use crate::utils::error::{CatalogError, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::io::Read;
use thiserror::Error;

pub const FIELD_COUNT: usize = 6;

/// Why a line did not become a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("year '{0}' is not an integer")]
    InvalidYear(String),

    #[error("rating '{0}' is not a number")]
    InvalidRating(String),

    #[error("duration '{0}' is not an integer")]
    InvalidDuration(String),

    #[error("line is not valid UTF-8")]
    Encoding,

    #[error("rejected: {0}")]
    Rejected(#[from] MovieValidationError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// `true` only for the literal `true`, ignoring case. Everything else,
/// including typos and empty text, reads as `false`.
pub fn parse_available(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Field count once trailing empty fields are dropped.
///
/// The line's own trailing whitespace does not count, so a last field made
/// only of blanks is empty too. Blank fields further in are kept.
pub fn counted_fields(record: &StringRecord) -> usize {
    let mut len = record.len();
    match record.get(len.wrapping_sub(1)) {
        Some(last) if last.trim_end().is_empty() => len -= 1,
        _ => return len,
    }
    while len > 0 && record.get(len - 1).is_some_and(str::is_empty) {
        len -= 1;
    }
    len
}

/// Turns one split line into an unvalidated record.
pub fn parse_line(record: &StringRecord) -> std::result::Result<Movie, SkipReason> {
    let found = counted_fields(record);
    if found != FIELD_COUNT {
        return Err(SkipReason::FieldCount { found });
    }

    let field = |i: usize| record.get(i).unwrap_or_default().trim();

    let year = field(2)
        .parse::<i32>()
        .map_err(|_| SkipReason::InvalidYear(field(2).to_string()))?;
    let rating = field(3)
        .parse::<f64>()
        .map_err(|_| SkipReason::InvalidRating(field(3).to_string()))?;
    let duration = field(4)
        .parse::<i32>()
        .map_err(|_| SkipReason::InvalidDuration(field(4).to_string()))?;

    Ok(Movie::new(
        field(0),
        field(1),
        year,
        rating,
        duration,
        parse_available(field(5)),
    ))
}

/// Reads every line from `reader`, handing parsed records to `accept`.
///
/// `accept` decides whether a record is kept; its rejection is logged as a
/// skip like any parse failure. Only read failures on the source escape.
pub fn import_records<R, F>(reader: R, mut accept: F) -> Result<ImportSummary>
where
    R: Read,
    F: FnMut(Movie) -> std::result::Result<(), MovieValidationError>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut summary = ImportSummary::default();
    let mut raw = ByteRecord::new();

    while csv_reader
        .read_byte_record(&mut raw)
        .map_err(|e| CatalogError::SourceRead(e.into()))?
    {
        let line = raw.position().map(|p| p.line()).unwrap_or_default();

        // Whitespace-only lines come through as a single empty field.
        if raw.len() == 1 && raw.get(0).is_some_and(|f| f.trim_ascii().is_empty()) {
            continue;
        }

        let outcome = StringRecord::from_byte_record(raw.clone())
            .map_err(|_| SkipReason::Encoding)
            .and_then(|record| parse_line(&record))
            .and_then(|movie| accept(movie).map_err(SkipReason::from));

        match outcome {
            Ok(()) => summary.imported += 1,
            Err(reason) => {
                summary.skipped += 1;
                tracing::debug!("Skipping import line {}: {}", line, reason);
            }
        }
    }

    tracing::info!(
        "Import finished: {} imported, {} skipped",
        summary.imported,
        summary.skipped
    );
    Ok(summary)
}
