//! Flat-file persistence for the event store.
//!
//! One record per line, no header:
//!
//! ```text
//! <YYYY-MM-DD>|<True|False>|<True|False>|<event1>,<event2>,...
//! ```
//!
//! Event text is not escaped. A comma inside an event splits it into two
//! events on reload; that is a limitation of the format. Line breaks cannot
//! be represented at all, so the store refuses event text containing them.

mod decode;
mod encode;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CalendarError, CalendarResult};
use crate::store::EventStore;

pub use decode::{decode, decode_line};
pub use encode::{encode, encode_record};

const FIELD_SEPARATOR: &str = "|";
const EVENT_SEPARATOR: &str = ",";
const TRUE: &str = "True";
const FALSE: &str = "False";

/// Write every record in `store` to `path`, replacing the file.
///
/// The content goes to a sibling temp file first and is renamed into place,
/// so a failed save never truncates the previous file.
pub fn save(store: &EventStore, path: &Path) -> CalendarResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CalendarError::file(parent, e))?;
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");

    fs::write(&temp, encode(store)).map_err(|e| CalendarError::file(&temp, e))?;
    fs::rename(&temp, path).map_err(|e| CalendarError::file(path, e))?;

    info!(path = %path.display(), records = store.len(), "saved events");
    Ok(())
}

/// Replace the contents of `store` with the records in `path`.
///
/// The whole file is parsed before the store is touched, so on any error the
/// previous records are left as they were. Returns the number of records
/// loaded.
pub fn load(store: &mut EventStore, path: &Path) -> CalendarResult<usize> {
    let content = fs::read_to_string(path).map_err(|e| CalendarError::file(path, e))?;

    let records = decode(&content)?;
    store.replace_all(records);

    info!(path = %path.display(), records = store.len(), "loaded events");
    Ok(store.len())
}
