//! Thread-safe handle to a single event store.
//!
//! The store itself has no locking. Front-ends that touch it from more than
//! one thread (a reminder timer next to a UI loop, a reload worker) share it
//! through this handle instead.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::codec;
use crate::error::CalendarResult;
use crate::store::EventStore;

#[derive(Debug, Clone, Default)]
pub struct SharedEventStore {
    inner: Arc<Mutex<EventStore>>,
}

impl SharedEventStore {
    pub fn new(store: EventStore) -> Self {
        SharedEventStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with shared access. Keep `f` short: other threads wait.
    pub fn read<T>(&self, f: impl FnOnce(&EventStore) -> T) -> T {
        f(&*self.inner.lock())
    }

    /// Run `f` with exclusive access.
    pub fn write<T>(&self, f: impl FnOnce(&mut EventStore) -> T) -> T {
        f(&mut *self.inner.lock())
    }

    /// Load `path` into the shared store.
    ///
    /// The file is read and parsed before the lock is taken, so readers are
    /// only blocked for the swap.
    pub fn reload(&self, path: &Path) -> CalendarResult<usize> {
        let mut fresh = EventStore::with_recurrence_step(self.read(|s| s.recurrence_step()));
        codec::load(&mut fresh, path)?;

        Ok(self.write(|store| {
            *store = fresh;
            store.len()
        }))
    }
}
