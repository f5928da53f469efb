//! What is due today.
//!
//! Everything here is a pure query over the store. Deciding when to ask, and
//! how often to remind, belongs to whoever drives the check.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::notifier::Notifier;
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReminderKind {
    Birthday,
    Event,
    Recurring,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ReminderKind::Birthday => "birthday",
            ReminderKind::Event => "event",
            ReminderKind::Recurring => "recurring",
        };
        write!(f, "{label}")
    }
}

/// One item due on a given day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub date: NaiveDate,
    pub text: String,
}

impl Reminder {
    pub fn new(kind: ReminderKind, date: NaiveDate, text: impl Into<String>) -> Self {
        Reminder {
            kind,
            date,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            ReminderKind::Birthday => "Birthday Today!",
            ReminderKind::Event => "Event Today",
            ReminderKind::Recurring => "Recurring Event Notification",
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            ReminderKind::Birthday => self.text.clone(),
            ReminderKind::Event => format!("Event Today: {}", self.text),
            ReminderKind::Recurring => format!("Reminder: {}", self.text),
        }
    }
}

/// Birthdays, plain events and recurring occurrences falling on `today`.
pub fn due_today(store: &EventStore, today: NaiveDate) -> BTreeSet<Reminder> {
    let mut due = BTreeSet::new();

    if store.birthdays_on(today) {
        for text in store.events_on(today) {
            due.insert(Reminder::new(ReminderKind::Birthday, today, text));
        }
    }

    for text in store.events_on(today) {
        due.insert(Reminder::new(ReminderKind::Event, today, text));
    }

    for text in store.recurring_occurrences_on_or_before(today) {
        due.insert(Reminder::new(ReminderKind::Recurring, today, text));
    }

    due
}

/// `due_today` for the date reported by `clock`.
pub fn due_now(store: &EventStore, clock: &dyn Clock) -> BTreeSet<Reminder> {
    due_today(store, clock.today())
}

/// Hand each reminder to `notifier`.
pub fn announce<'a>(reminders: impl IntoIterator<Item = &'a Reminder>, notifier: &dyn Notifier) {
    for reminder in reminders {
        notifier.notify(reminder.title(), &reminder.message());
    }
}
