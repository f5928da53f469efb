use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &Session, date: &str, birthday: Option<bool>) -> Result<()> {
    let mut store = session.load_store()?;

    match store.delete(date, birthday)? {
        Some(removed) => {
            session.save_store(&store)?;
            let count = removed.events.len();
            println!(
                "{} Deleted {} {} on {}",
                "✓".green(),
                count,
                if count == 1 { "event" } else { "events" },
                date
            );
        }
        None => println!("{}", format!("Nothing to delete on {date}").dimmed()),
    }

    Ok(())
}
