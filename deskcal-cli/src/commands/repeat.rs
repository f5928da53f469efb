use anyhow::Result;
use deskcal_core::{Frequency, schedule_recurring};
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &Session, text: &str, start: &str, end: &str, every: i64) -> Result<()> {
    let frequency = Frequency::days(every)?;

    let mut store = session.load_store()?;
    let count = schedule_recurring(&mut store, text, start, end, every)?;

    if count == 0 {
        println!("{}", format!("No occurrences between {start} and {end}").dimmed());
        return Ok(());
    }

    session.save_store(&store)?;
    println!(
        "{} Scheduled {} {} of {} ({})",
        "✓".green(),
        count,
        if count == 1 { "occurrence" } else { "occurrences" },
        text,
        frequency
    );
    Ok(())
}
