//! The reminder loop.
//!
//! `due_today` is stateless, so asking every second would repeat the same
//! reminders every second. The daemon remembers what it already delivered
//! and forgets it when the day changes.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use deskcal_core::reminder::announce;
use deskcal_core::{Clock, Notifier, Reminder, SharedEventStore, due_today};
use tracing::{debug, info};

pub struct Daemon {
    store: SharedEventStore,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
    day: Option<NaiveDate>,
    delivered: HashSet<Reminder>,
}

impl Daemon {
    pub fn new(store: SharedEventStore, notifier: Box<dyn Notifier>, clock: Box<dyn Clock>) -> Self {
        Daemon {
            store,
            notifier,
            clock,
            day: None,
            delivered: HashSet::new(),
        }
    }

    /// Check once and deliver anything not yet delivered today.
    /// Returns how many notifications were sent.
    pub fn tick(&mut self) -> usize {
        let today = self.clock.today();
        if self.day != Some(today) {
            debug!(%today, "new day, clearing delivered reminders");
            self.day = Some(today);
            self.delivered.clear();
        }

        let due = self.store.read(|store| due_today(store, today));
        let fresh: Vec<Reminder> = due
            .into_iter()
            .filter(|reminder| !self.delivered.contains(reminder))
            .collect();

        announce(&fresh, self.notifier.as_ref());
        self.delivered.extend(fresh.iter().cloned());

        if !fresh.is_empty() {
            info!(count = fresh.len(), %today, "delivered reminders");
        }
        fresh.len()
    }

    /// Tick forever, `interval` apart.
    pub fn run(&mut self, interval: Duration) {
        loop {
            self.tick();
            thread::sleep(interval);
        }
    }
}
