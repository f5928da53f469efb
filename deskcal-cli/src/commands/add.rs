use anyhow::Result;
use deskcal_core::EventFlags;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &Session, date: &str, text: &str, birthday: bool, recurring: bool) -> Result<()> {
    let mut store = session.load_store()?;
    store.schedule(date, text, EventFlags::new(birthday, recurring))?;
    session.save_store(&store)?;

    println!("{} Event scheduled on {}: {}", "✓".green(), date, text);
    Ok(())
}
