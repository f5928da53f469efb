//! deskcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::recurrence::Frequency;
use crate::store::EventStore;

static DEFAULT_EVENTS_FILE: &str = "~/calendar/events.txt";
static DEFAULT_APP_NAME: &str = "Desktop Calendar App";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_recurrence_step_days() -> i64 {
    7
}

/// Configuration at ~/.config/deskcal/config.toml, overridable through
/// `DESKCAL_*` environment variables (`DESKCAL_NOTIFY__TIMEOUT_SECS=5`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskcalConfig {
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// Days between occurrences of a recurring record.
    #[serde(default = "default_recurrence_step_days")]
    pub recurrence_step_days: i64,

    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Seconds between reminder checks
    pub poll_interval_secs: u64,
    /// Seconds between re-reading the events file
    pub reload_interval_secs: u64,
    /// How long a desktop notification stays on screen
    pub timeout_secs: u32,
    pub app_name: String,
    /// Send desktop notifications; when false reminders are only logged
    pub desktop: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            poll_interval_secs: 1,
            reload_interval_secs: 5,
            timeout_secs: 10,
            app_name: DEFAULT_APP_NAME.to_string(),
            desktop: true,
        }
    }
}

impl Default for DeskcalConfig {
    fn default() -> Self {
        DeskcalConfig {
            events_file: default_events_file(),
            recurrence_step_days: default_recurrence_step_days(),
            notify: NotifyConfig::default(),
        }
    }
}

impl DeskcalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("deskcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the default config file, creating a commented template first if
    /// there is none.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load `path` (if it exists) layered under the environment.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        let config: DeskcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("DESKCAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CalendarResult<()> {
        self.recurrence_step()?;

        if self.notify.poll_interval_secs == 0 {
            return Err(CalendarError::Config(
                "notify.poll_interval_secs must be at least 1".into(),
            ));
        }
        if self.notify.reload_interval_secs == 0 {
            return Err(CalendarError::Config(
                "notify.reload_interval_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// The events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn recurrence_step(&self) -> CalendarResult<Frequency> {
        Frequency::days(self.recurrence_step_days)
    }

    /// An empty store using the configured recurrence step.
    pub fn new_store(&self) -> CalendarResult<EventStore> {
        Ok(EventStore::with_recurrence_step(self.recurrence_step()?))
    }

    pub fn to_toml(&self) -> CalendarResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Write the config as TOML to `path`.
    pub fn save(&self, path: &Path) -> CalendarResult<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CalendarError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let defaults = NotifyConfig::default();
        let contents = format!(
            "\
# deskcal configuration

# Where events are saved:
# events_file = \"{DEFAULT_EVENTS_FILE}\"

# Days between repeats of a recurring event:
# recurrence_step_days = {step}

# [notify]
# poll_interval_secs = {poll}
# reload_interval_secs = {reload}
# timeout_secs = {timeout}
# app_name = \"{DEFAULT_APP_NAME}\"
# desktop = true
",
            step = default_recurrence_step_days(),
            poll = defaults.poll_interval_secs,
            reload = defaults.reload_interval_secs,
            timeout = defaults.timeout_secs,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
