//! Fixed-interval recurrence.
//!
//! A recurring event repeats every N days from its start date. Both the
//! scheduling path (materializing one record per occurrence) and the query
//! path (is this record due on a given day?) walk the same `Occurrences`
//! iterator.

use std::fmt;

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::date::IntoDate;
use crate::error::{CalendarError, CalendarResult};
use crate::event::EventFlags;
use crate::store::{EventStore, check_text};

/// A positive number of days between occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency(u32);

impl Frequency {
    pub const DAILY: Frequency = Frequency(1);
    pub const WEEKLY: Frequency = Frequency(7);

    /// Rejects zero and negative steps, which would never advance.
    pub fn days(days: i64) -> CalendarResult<Self> {
        match u32::try_from(days) {
            Ok(days) if days > 0 => Ok(Frequency(days)),
            _ => Err(CalendarError::InvalidFrequency(days)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            1 => write!(f, "every day"),
            7 => write!(f, "every week"),
            n => write!(f, "every {n} days"),
        }
    }
}

/// Occurrence dates from a start date through an inclusive end date.
///
/// Finite, and cheap to clone for a restart from the beginning.
#[derive(Debug, Clone)]
pub struct Occurrences {
    next: Option<NaiveDate>,
    through: NaiveDate,
    step: Frequency,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.through)?;
        self.next = current.checked_add_days(Days::new(u64::from(self.step.get())));
        Some(current)
    }
}

/// Occurrences of a recurring event starting on `start`, up to and including
/// `through`. Empty when `start` is after `through`.
pub fn occurrences_of(start: NaiveDate, through: NaiveDate, step: Frequency) -> Occurrences {
    Occurrences {
        next: Some(start),
        through,
        step,
    }
}

/// Schedule `event` as a recurring event on every occurrence between `start`
/// and `end` inclusive, `frequency_days` apart.
///
/// All occurrences are validated before the first one is written, so a
/// failure leaves the store untouched. Returns the number of dates scheduled.
pub fn schedule_recurring(
    store: &mut EventStore,
    event: &str,
    start: impl IntoDate,
    end: impl IntoDate,
    frequency_days: i64,
) -> CalendarResult<usize> {
    let step = Frequency::days(frequency_days)?;
    let start = start.into_date()?;
    let end = end.into_date()?;
    check_text(event)?;

    let dates: Vec<NaiveDate> = occurrences_of(start, end, step).collect();
    for date in &dates {
        store.check_flags(*date, EventFlags::RECURRING)?;
    }

    for date in &dates {
        store.schedule(*date, event, EventFlags::RECURRING)?;
    }

    debug!(%start, %end, %step, count = dates.len(), event, "scheduled recurring event");
    Ok(dates.len())
}
