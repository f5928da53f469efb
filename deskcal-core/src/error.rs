//! Error types for deskcal.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::EventFlags;

/// Errors that can occur in deskcal operations.
///
/// Every variant is recoverable: the core hands it back to the caller and
/// leaves presentation to the front-end.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid recurrence frequency {0}: must be a positive number of days")]
    InvalidFrequency(i64),

    #[error("Event text cannot contain line breaks: {0:?}")]
    InvalidEventText(String),

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Could not access {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Events on {date} are already {existing}, cannot schedule as {requested}")]
    ConflictingFlags {
        date: NaiveDate,
        existing: EventFlags,
        requested: EventFlags,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalendarError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CalendarError::FileUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for deskcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
