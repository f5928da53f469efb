//! Per-date event records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flags shared by every event on a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventFlags {
    pub birthday: bool,
    pub recurring: bool,
}

impl EventFlags {
    pub const NONE: EventFlags = EventFlags {
        birthday: false,
        recurring: false,
    };

    pub const BIRTHDAY: EventFlags = EventFlags {
        birthday: true,
        recurring: false,
    };

    pub const RECURRING: EventFlags = EventFlags {
        birthday: false,
        recurring: true,
    };

    pub fn new(birthday: bool, recurring: bool) -> Self {
        EventFlags {
            birthday,
            recurring,
        }
    }
}

impl fmt::Display for EventFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.birthday, self.recurring) {
            (false, false) => write!(f, "plain events"),
            (true, false) => write!(f, "a birthday"),
            (false, true) => write!(f, "recurring"),
            (true, true) => write!(f, "a recurring birthday"),
        }
    }
}

/// All events scheduled on one calendar date.
///
/// `events` is never empty: a record only comes into existence when its
/// first event is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub events: Vec<String>,
    pub is_birthday: bool,
    pub is_recurring: bool,
}

impl EventRecord {
    pub fn new(date: NaiveDate, first_event: String, flags: EventFlags) -> Self {
        EventRecord {
            date,
            events: vec![first_event],
            is_birthday: flags.birthday,
            is_recurring: flags.recurring,
        }
    }

    pub fn flags(&self) -> EventFlags {
        EventFlags::new(self.is_birthday, self.is_recurring)
    }

    /// Events joined for display in a single calendar cell.
    pub fn summary(&self) -> String {
        self.events.join(", ")
    }
}
