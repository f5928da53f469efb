//! Core of the deskcal desktop calendar.
//!
//! - `store`: events keyed by calendar date
//! - `codec`: the line-oriented events file
//! - `recurrence`: fixed-interval repeating events
//! - `reminder`: what is due today, and handing it to a `Notifier`

pub mod clock;
pub mod codec;
pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod logging;
pub mod notifier;
pub mod recurrence;
pub mod reminder;
pub mod shared;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DeskcalConfig;
pub use date::{IntoDate, YearMonth, parse_date};
pub use error::{CalendarError, CalendarResult};
pub use event::{EventFlags, EventRecord};
pub use notifier::{LogNotifier, Notifier};
pub use recurrence::{Frequency, schedule_recurring};
pub use reminder::{Reminder, ReminderKind, due_today};
pub use shared::SharedEventStore;
pub use store::EventStore;
