//! Calendar date parsing and month arithmetic.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields like `2024-3-5`; those are rejected here so
/// that every stored key has exactly one textual form.
pub fn parse_date(s: &str) -> CalendarResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDateFormat(s.to_string()))?;

    if format_date(date) != s {
        return Err(CalendarError::InvalidDateFormat(s.to_string()));
    }

    Ok(date)
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Anything that can be turned into a validated calendar date.
///
/// Mutating operations accept `impl IntoDate` so callers can hand over either
/// raw user input or an already-parsed `NaiveDate`.
pub trait IntoDate {
    fn into_date(self) -> CalendarResult<NaiveDate>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> CalendarResult<NaiveDate> {
        Ok(self)
    }
}

impl IntoDate for &NaiveDate {
    fn into_date(self) -> CalendarResult<NaiveDate> {
        Ok(*self)
    }
}

impl IntoDate for &str {
    fn into_date(self) -> CalendarResult<NaiveDate> {
        parse_date(self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> CalendarResult<NaiveDate> {
        parse_date(self)
    }
}

/// A calendar month, used to navigate the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Returns None if `month` is outside 1..=12 or the year is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| YearMonth { first_day })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> CalendarResult<Self> {
        let invalid = || CalendarError::InvalidDateFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).ok_or_else(invalid)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The following month, rolling December over into January.
    pub fn next(&self) -> Self {
        let first_day = self
            .first_day
            .checked_add_months(Months::new(1))
            .unwrap_or(self.first_day);
        YearMonth { first_day }
    }

    /// The preceding month, rolling January back into December.
    pub fn prev(&self) -> Self {
        let first_day = self
            .first_day
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.first_day);
        YearMonth { first_day }
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first_day.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first_day).num_days() as u32,
            // Only reachable for the very last month chrono can represent
            None => 31,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}
