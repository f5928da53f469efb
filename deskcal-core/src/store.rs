//! In-memory event storage keyed by calendar date.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::{IntoDate, YearMonth};
use crate::error::{CalendarError, CalendarResult};
use crate::event::{EventFlags, EventRecord};
use crate::recurrence::{Frequency, occurrences_of};

/// Owns every event record, at most one per date.
///
/// Records iterate in insertion order, which is also the order they are
/// written back to disk.
#[derive(Debug, Clone)]
pub struct EventStore {
    records: HashMap<NaiveDate, EventRecord>,
    order: Vec<NaiveDate>,
    recurrence_step: Frequency,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_recurrence_step(Frequency::WEEKLY)
    }

    /// Create a store whose recurring records repeat every `step`.
    pub fn with_recurrence_step(step: Frequency) -> Self {
        EventStore {
            records: HashMap::new(),
            order: Vec::new(),
            recurrence_step: step,
        }
    }

    pub fn recurrence_step(&self) -> Frequency {
        self.recurrence_step
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &EventRecord> {
        self.order.iter().filter_map(|date| self.records.get(date))
    }

    pub fn get(&self, date: NaiveDate) -> Option<&EventRecord> {
        self.records.get(&date)
    }

    // WRITE PATH:

    /// Append `event` to the record for `date`, creating the record if needed.
    ///
    /// Flags belong to the date, so scheduling onto an existing record with
    /// different flags is rejected rather than silently ignored. Text holding
    /// a line break is rejected too, since each record is one line on disk.
    pub fn schedule(
        &mut self,
        date: impl IntoDate,
        event: impl Into<String>,
        flags: EventFlags,
    ) -> CalendarResult<()> {
        let date = date.into_date()?;
        let event = event.into();
        check_text(&event)?;
        self.check_flags(date, flags)?;

        debug!(%date, event = %event, ?flags, "scheduling event");

        match self.records.get_mut(&date) {
            Some(record) => record.events.push(event),
            None => {
                self.records.insert(date, EventRecord::new(date, event, flags));
                self.order.push(date);
            }
        }

        Ok(())
    }

    /// Fails if `date` already holds events with flags other than `flags`.
    pub(crate) fn check_flags(&self, date: NaiveDate, flags: EventFlags) -> CalendarResult<()> {
        match self.records.get(&date) {
            Some(record) if record.flags() != flags => Err(CalendarError::ConflictingFlags {
                date,
                existing: record.flags(),
                requested: flags,
            }),
            _ => Ok(()),
        }
    }

    /// Remove the whole record for `date`.
    ///
    /// With `birthday: Some(flag)` the record is only removed when its
    /// birthday flag equals `flag`. Returns the removed record, or None when
    /// nothing matched (which is not an error).
    pub fn delete(
        &mut self,
        date: impl IntoDate,
        birthday: Option<bool>,
    ) -> CalendarResult<Option<EventRecord>> {
        let date = date.into_date()?;

        let matches = match (self.records.get(&date), birthday) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(record), Some(flag)) => record.is_birthday == flag,
        };
        if !matches {
            debug!(%date, ?birthday, "nothing to delete");
            return Ok(None);
        }

        self.order.retain(|d| *d != date);
        let removed = self.records.remove(&date);
        debug!(%date, "deleted record");
        Ok(removed)
    }

    /// Replace every record at once. Later duplicates of a date win but keep
    /// the position of the first occurrence.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = EventRecord>) {
        self.records.clear();
        self.order.clear();

        for record in records {
            let date = record.date;
            if self.records.insert(date, record).is_none() {
                self.order.push(date);
            }
        }
    }

    // READ PATH:

    /// Day-of-month to the day's events joined with `", "`.
    pub fn events_for_month(&self, year: i32, month: u32) -> BTreeMap<u32, String> {
        let Some(wanted) = YearMonth::new(year, month) else {
            return BTreeMap::new();
        };

        self.records()
            .filter(|record| wanted.contains(record.date))
            .map(|record| (record.date.day(), record.summary()))
            .collect()
    }

    pub fn events_on(&self, date: NaiveDate) -> &[String] {
        self.records
            .get(&date)
            .map(|record| record.events.as_slice())
            .unwrap_or(&[])
    }

    pub fn birthdays_on(&self, date: NaiveDate) -> bool {
        self.records
            .get(&date)
            .is_some_and(|record| record.is_birthday)
    }

    /// Event text of every recurring record whose occurrences, expanded from
    /// the record's own date through `date`, land on `date`.
    ///
    /// Each text appears once, in the order its first record was inserted.
    pub fn recurring_occurrences_on_or_before(&self, date: NaiveDate) -> Vec<String> {
        let mut seen = HashSet::new();

        self.records()
            .filter(|record| record.is_recurring)
            .filter(|record| {
                occurrences_of(record.date, date, self.recurrence_step)
                    .any(|occurrence| occurrence == date)
            })
            .flat_map(|record| record.events.iter())
            .filter(|text| seen.insert(*text))
            .cloned()
            .collect()
    }
}

/// Fails if `event` would not fit on a single line of the events file.
pub(crate) fn check_text(event: &str) -> CalendarResult<()> {
    if event.contains(['\n', '\r']) {
        return Err(CalendarError::InvalidEventText(event.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_appends_as_last_event() {
        let mut store = EventStore::new();
        store.schedule("2024-03-10", "Lunch", EventFlags::NONE).unwrap();
        store.schedule("2024-03-10", "Dentist", EventFlags::NONE).unwrap();
        store.schedule("2024-03-10", "Lunch", EventFlags::NONE).unwrap();

        assert_eq!(
            store.events_on(date(2024, 3, 10)),
            ["Lunch", "Dentist", "Lunch"]
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_schedule_rejects_invalid_date() {
        let mut store = EventStore::new();
        let err = store
            .schedule("2024-02-30", "Nope", EventFlags::NONE)
            .unwrap_err();

        assert!(matches!(err, CalendarError::InvalidDateFormat(ref s) if s == "2024-02-30"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_schedule_rejects_line_breaks() {
        let mut store = EventStore::new();
        store.schedule("2024-03-10", "Lunch", EventFlags::NONE).unwrap();

        for text in ["Lunch\nat noon", "Dinner\r", "\n"] {
            let err = store
                .schedule("2024-03-10", text, EventFlags::NONE)
                .unwrap_err();
            assert!(matches!(err, CalendarError::InvalidEventText(ref s) if s == text));
        }
        let err = store
            .schedule("2024-03-11", "a\nb", EventFlags::NONE)
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidEventText(_)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.events_on(date(2024, 3, 10)), ["Lunch"]);
    }

    #[test]
    fn test_schedule_rejects_conflicting_flags() {
        let mut store = EventStore::new();
        store
            .schedule("2024-03-10", "Grandma's Birthday", EventFlags::BIRTHDAY)
            .unwrap();

        let err = store
            .schedule("2024-03-10", "Cake", EventFlags::NONE)
            .unwrap_err();

        assert!(matches!(err, CalendarError::ConflictingFlags { .. }));
        assert_eq!(store.events_on(date(2024, 3, 10)), ["Grandma's Birthday"]);

        store
            .schedule("2024-03-10", "Cake", EventFlags::BIRTHDAY)
            .unwrap();
        assert_eq!(store.events_on(date(2024, 3, 10)).len(), 2);
    }

    #[test]
    fn test_records_iterate_in_insertion_order() {
        let mut store = EventStore::new();
        store.schedule("2024-05-01", "C", EventFlags::NONE).unwrap();
        store.schedule("2024-01-01", "A", EventFlags::NONE).unwrap();
        store.schedule("2024-03-01", "B", EventFlags::NONE).unwrap();

        let dates: Vec<_> = store.records().map(|r| r.date).collect();
        assert_eq!(dates, [date(2024, 5, 1), date(2024, 1, 1), date(2024, 3, 1)]);
    }

    #[test]
    fn test_delete_missing_date_is_noop() {
        let mut store = EventStore::new();
        store.schedule("2024-03-10", "Lunch", EventFlags::NONE).unwrap();

        let removed = store.delete("2024-03-11", None).unwrap();

        assert!(removed.is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.events_on(date(2024, 3, 10)), ["Lunch"]);
    }

    #[test]
    fn test_delete_removes_whole_record() {
        let mut store = EventStore::new();
        store.schedule("2024-03-10", "Lunch", EventFlags::NONE).unwrap();
        store.schedule("2024-03-10", "Gym", EventFlags::NONE).unwrap();

        let removed = store.delete("2024-03-10", None).unwrap().unwrap();

        assert_eq!(removed.events, ["Lunch", "Gym"]);
        assert!(store.is_empty());
        assert!(store.events_on(date(2024, 3, 10)).is_empty());
    }

    #[test]
    fn test_delete_birthday_filter() {
        let mut store = EventStore::new();
        store
            .schedule("2024-03-10", "Grandma's Birthday", EventFlags::BIRTHDAY)
            .unwrap();

        assert!(store.delete("2024-03-10", Some(false)).unwrap().is_none());
        assert!(store.birthdays_on(date(2024, 3, 10)));

        assert!(store.delete("2024-03-10", Some(true)).unwrap().is_some());
        assert!(!store.birthdays_on(date(2024, 3, 10)));
    }

    #[test]
    fn test_delete_rejects_invalid_date() {
        let mut store = EventStore::new();
        assert!(matches!(
            store.delete("not-a-date", None),
            Err(CalendarError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_events_for_month_only_includes_matching_month() {
        let mut store = EventStore::new();
        store.schedule("2024-03-01", "Rent", EventFlags::NONE).unwrap();
        store.schedule("2024-03-31", "Review", EventFlags::NONE).unwrap();
        store.schedule("2024-03-31", "Retro", EventFlags::NONE).unwrap();
        store.schedule("2024-04-01", "April", EventFlags::NONE).unwrap();
        store.schedule("2023-03-15", "Last year", EventFlags::NONE).unwrap();

        let month = store.events_for_month(2024, 3);

        assert_eq!(month.len(), 2);
        assert_eq!(month[&1], "Rent");
        assert_eq!(month[&31], "Review, Retro");
        let days_in_march = YearMonth::new(2024, 3).unwrap().days_in_month();
        assert!(month.keys().all(|day| (1..=days_in_march).contains(day)));
    }

    #[test]
    fn test_events_for_month_empty_and_out_of_range() {
        let mut store = EventStore::new();
        store.schedule("2024-03-01", "Rent", EventFlags::NONE).unwrap();

        assert!(store.events_for_month(2024, 2).is_empty());
        assert!(store.events_for_month(2024, 13).is_empty());
        assert!(store.events_for_month(2024, 0).is_empty());
    }

    #[test]
    fn test_birthdays_on() {
        let mut store = EventStore::new();
        store
            .schedule("2024-03-10", "Grandma's Birthday", EventFlags::BIRTHDAY)
            .unwrap();
        store.schedule("2024-03-11", "Lunch", EventFlags::NONE).unwrap();

        assert!(store.birthdays_on(date(2024, 3, 10)));
        assert!(!store.birthdays_on(date(2024, 3, 11)));
        assert!(!store.birthdays_on(date(2024, 3, 12)));
    }

    #[test]
    fn test_recurring_occurrences_follow_weekly_step() {
        let mut store = EventStore::new();
        store
            .schedule("2024-01-01", "Standup", EventFlags::RECURRING)
            .unwrap();
        store.schedule("2024-01-08", "Lunch", EventFlags::NONE).unwrap();

        assert_eq!(
            store.recurring_occurrences_on_or_before(date(2024, 1, 1)),
            ["Standup"]
        );
        assert_eq!(
            store.recurring_occurrences_on_or_before(date(2024, 1, 29)),
            ["Standup"]
        );
        assert!(store
            .recurring_occurrences_on_or_before(date(2024, 1, 9))
            .is_empty());
        // Before the record's own date there is nothing to expand
        assert!(store
            .recurring_occurrences_on_or_before(date(2023, 12, 25))
            .is_empty());
    }

    #[test]
    fn test_recurring_occurrences_report_each_text_once() {
        let mut store = EventStore::new();
        for day in ["2024-01-01", "2024-01-08", "2024-01-15"] {
            store
                .schedule(day, "Weekly Meeting", EventFlags::RECURRING)
                .unwrap();
        }
        store
            .schedule("2024-01-08", "Standup", EventFlags::RECURRING)
            .unwrap();

        assert_eq!(
            store.recurring_occurrences_on_or_before(date(2024, 1, 15)),
            ["Weekly Meeting", "Standup"]
        );
    }

    #[test]
    fn test_recurring_occurrences_use_configured_step() {
        let mut store = EventStore::with_recurrence_step(Frequency::days(3).unwrap());
        store
            .schedule("2024-01-01", "Water plants", EventFlags::RECURRING)
            .unwrap();

        assert_eq!(
            store.recurring_occurrences_on_or_before(date(2024, 1, 4)),
            ["Water plants"]
        );
        assert!(store
            .recurring_occurrences_on_or_before(date(2024, 1, 8))
            .is_empty());
    }

    #[test]
    fn test_replace_all_keeps_first_position_for_duplicates() {
        let mut store = EventStore::new();
        store.schedule("2024-09-09", "Old", EventFlags::NONE).unwrap();

        store.replace_all([
            EventRecord::new(date(2024, 1, 1), "A".into(), EventFlags::NONE),
            EventRecord::new(date(2024, 2, 2), "B".into(), EventFlags::NONE),
            EventRecord::new(date(2024, 1, 1), "A2".into(), EventFlags::BIRTHDAY),
        ]);

        let dates: Vec<_> = store.records().map(|r| r.date).collect();
        assert_eq!(dates, [date(2024, 1, 1), date(2024, 2, 2)]);
        assert_eq!(store.events_on(date(2024, 1, 1)), ["A2"]);
        assert!(store.birthdays_on(date(2024, 1, 1)));
        assert!(store.events_on(date(2024, 9, 9)).is_empty());
    }
}
