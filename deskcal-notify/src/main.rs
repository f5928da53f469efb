mod daemon;
mod desktop;
mod reload;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use deskcal_core::logging::init_logging;
use deskcal_core::{DeskcalConfig, LogNotifier, Notifier, SharedEventStore, SystemClock};
use tracing::info;

use crate::daemon::Daemon;
use crate::desktop::DesktopNotifier;
use crate::reload::Reloader;

#[derive(Parser)]
#[command(name = "deskcal-notify")]
#[command(about = "Show desktop notifications for today's deskcal reminders")]
struct Args {
    /// Events file to watch instead of the configured one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check once and exit
    #[arg(long)]
    once: bool,

    /// Log reminders instead of showing desktop notifications
    #[arg(long)]
    log_only: bool,
}

fn main() -> Result<()> {
    init_logging("info");

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DeskcalConfig::load_from(path),
        None => DeskcalConfig::load(),
    }
    .context("Failed to load configuration")?;
    let events_path = args.file.unwrap_or_else(|| config.events_path());

    let store = SharedEventStore::new(config.new_store()?);
    let mut reloader = Reloader::new(events_path.clone(), store.clone());
    reloader
        .poll()
        .with_context(|| format!("Failed to load events from {}", events_path.display()))?;

    let notifier: Box<dyn Notifier> = if args.log_only || !config.notify.desktop {
        Box::new(LogNotifier)
    } else {
        Box::new(DesktopNotifier::new(&config.notify))
    };
    let mut daemon = Daemon::new(store, notifier, Box::new(SystemClock));

    if args.once {
        daemon.tick();
        return Ok(());
    }

    reloader.spawn(Duration::from_secs(config.notify.reload_interval_secs));

    info!(
        path = %events_path.display(),
        every_secs = config.notify.poll_interval_secs,
        "watching for reminders"
    );
    daemon.run(Duration::from_secs(config.notify.poll_interval_secs));

    Ok(())
}
