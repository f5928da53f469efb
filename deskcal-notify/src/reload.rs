//! Keeps the shared store in step with the events file.

use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use deskcal_core::{CalendarResult, SharedEventStore};
use tracing::{debug, warn};

/// What the last successful reload saw of the file. Length is compared too,
/// since two writes inside one timestamp tick share an mtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: SystemTime,
    len: u64,
}

pub struct Reloader {
    path: PathBuf,
    store: SharedEventStore,
    last_seen: Option<FileStamp>,
}

impl Reloader {
    pub fn new(path: PathBuf, store: SharedEventStore) -> Self {
        Reloader {
            path,
            store,
            last_seen: None,
        }
    }

    /// Reload if the file's mtime or length changed since the last
    /// successful reload. Returns true when the store was replaced.
    pub fn poll(&mut self) -> CalendarResult<bool> {
        let stamp = match std::fs::metadata(&self.path) {
            Ok(metadata) => match metadata.modified() {
                Ok(modified) => FileStamp {
                    modified,
                    len: metadata.len(),
                },
                Err(_) => return Ok(false),
            },
            Err(_) => {
                debug!(path = %self.path.display(), "events file not there yet");
                return Ok(false);
            }
        };

        if self.last_seen == Some(stamp) {
            return Ok(false);
        }

        let count = self.store.reload(&self.path)?;
        self.last_seen = Some(stamp);
        debug!(path = %self.path.display(), records = count, "reloaded events");
        Ok(true)
    }

    /// Poll on a background thread, `interval` apart. A file that fails to
    /// parse is logged and the previous records stay in place.
    pub fn spawn(mut self, interval: Duration) -> JoinHandle<()> {
        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if let Err(e) = self.poll() {
                    warn!(error = %e, "could not reload events");
                }
            }
        })
    }
}
