use anyhow::Result;
use deskcal_core::parse_date;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let store = session.load_store()?;

    match store.get(date) {
        Some(record) => println!("{}", record.render()),
        None => println!("{}", format!("No events on {date}").dimmed()),
    }

    let recurring = store.recurring_occurrences_on_or_before(date);
    if !recurring.is_empty() {
        println!();
        println!("{}", "Repeating on this day:".dimmed());
        for text in recurring {
            println!("  ↻ {text}");
        }
    }

    Ok(())
}
