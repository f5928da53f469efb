//! Store to text.

use crate::date::format_date;
use crate::event::EventRecord;
use crate::store::EventStore;

use super::{EVENT_SEPARATOR, FALSE, FIELD_SEPARATOR, TRUE};

/// Encode every record in insertion order, one line each.
pub fn encode(store: &EventStore) -> String {
    store
        .records()
        .map(|record| encode_record(record) + "\n")
        .collect()
}

/// Encode a single record without the trailing newline.
pub fn encode_record(record: &EventRecord) -> String {
    let events = record.events.join(EVENT_SEPARATOR);

    [
        format_date(record.date),
        flag(record.is_birthday).to_string(),
        flag(record.is_recurring).to_string(),
        events,
    ]
    .join(FIELD_SEPARATOR)
}

fn flag(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventFlags;
    use chrono::NaiveDate;

    #[test]
    fn test_encode_record_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut record = EventRecord::new(date, "Grandma's Birthday".into(), EventFlags::BIRTHDAY);

        assert_eq!(encode_record(&record), "2024-03-10|True|False|Grandma's Birthday");

        record.events.push("Cake".into());
        assert_eq!(
            encode_record(&record),
            "2024-03-10|True|False|Grandma's Birthday,Cake"
        );
    }

    #[test]
    fn test_encode_store_in_insertion_order() {
        let mut store = EventStore::new();
        store.schedule("2024-05-01", "Later", EventFlags::RECURRING).unwrap();
        store.schedule("2024-01-01", "Earlier", EventFlags::NONE).unwrap();

        assert_eq!(
            encode(&store),
            "2024-05-01|False|True|Later\n2024-01-01|False|False|Earlier\n"
        );
    }

    #[test]
    fn test_encode_empty_store() {
        assert_eq!(encode(&EventStore::new()), "");
    }
}
