//! Config, events file and clock shared by every command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use deskcal_core::{Clock, DeskcalConfig, EventStore, SystemClock, codec};
use tracing::debug;

pub struct Session {
    pub config: DeskcalConfig,
    pub events_path: PathBuf,
    clock: Box<dyn Clock>,
}

impl Session {
    /// `config_path` overrides the default config location and `file` the
    /// configured events file.
    pub fn open(config_path: Option<&Path>, file: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => DeskcalConfig::load_from(path),
            None => DeskcalConfig::load(),
        }
        .context("Failed to load configuration")?;

        let events_path = file.unwrap_or_else(|| config.events_path());

        Ok(Session {
            config,
            events_path,
            clock: Box::new(SystemClock),
        })
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The stored events, or an empty store if nothing has been saved yet.
    pub fn load_store(&self) -> Result<EventStore> {
        let mut store = self.config.new_store()?;

        if !self.events_path.exists() {
            debug!(path = %self.events_path.display(), "no events file yet");
            return Ok(store);
        }

        codec::load(&mut store, &self.events_path).with_context(|| {
            format!("Failed to load events from {}", self.events_path.display())
        })?;
        Ok(store)
    }

    pub fn save_store(&self, store: &EventStore) -> Result<()> {
        codec::save(store, &self.events_path)
            .with_context(|| format!("Failed to save events to {}", self.events_path.display()))
    }
}
