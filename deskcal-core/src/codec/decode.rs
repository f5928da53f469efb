//! Text to records.

use tracing::warn;

use crate::date::parse_date;
use crate::error::{CalendarError, CalendarResult};
use crate::event::EventRecord;

use super::{EVENT_SEPARATOR, FIELD_SEPARATOR, TRUE};

/// Decode every non-blank line. `line` numbers in errors are 1-based.
pub fn decode(content: &str) -> CalendarResult<Vec<EventRecord>> {
    let mut records: Vec<EventRecord> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let record = decode_line(line, index + 1)?;
        if records.iter().any(|r| r.date == record.date) {
            warn!(date = %record.date, line = index + 1, "duplicate date, later line wins");
        }
        records.push(record);
    }

    Ok(records)
}

/// Decode one line. The fourth field keeps any further `|` characters so
/// event text containing them survives a round-trip.
pub fn decode_line(line: &str, line_number: usize) -> CalendarResult<EventRecord> {
    let malformed = |reason: String| CalendarError::MalformedLine {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.splitn(4, FIELD_SEPARATOR).collect();
    let [date, birthday, recurring, events] = fields[..] else {
        return Err(malformed(format!(
            "expected 4 '{FIELD_SEPARATOR}'-separated fields, found {}",
            fields.len()
        )));
    };

    let date = parse_date(date).map_err(|_| malformed(format!("invalid date '{date}'")))?;

    Ok(EventRecord {
        date,
        events: events.split(EVENT_SEPARATOR).map(String::from).collect(),
        is_birthday: birthday == TRUE,
        is_recurring: recurring == TRUE,
    })
}
