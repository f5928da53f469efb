use std::path::Path;

use anyhow::{Context, Result};
use deskcal_core::codec;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &Session, path: &Path) -> Result<()> {
    let store = session.load_store()?;

    codec::save(&store, path)
        .with_context(|| format!("Failed to save events to {}", path.display()))?;

    println!("{} Events saved to {}.", "✓".green(), path.display());
    Ok(())
}
