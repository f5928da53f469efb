use anyhow::Result;
use deskcal_core::{due_today, parse_date};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, date: Option<&str>) -> Result<()> {
    let today = match date {
        Some(s) => parse_date(s)?,
        None => session.today(),
    };

    let store = session.load_store()?;
    let due = due_today(&store, today);

    if due.is_empty() {
        println!("{}", "Nothing due today".dimmed());
        return Ok(());
    }

    println!("{}", today.format("%A %-d %B %Y").bold());
    for reminder in &due {
        println!("  {}", reminder.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::session;
    use chrono::NaiveDate;
    use deskcal_core::{EventFlags, ReminderKind};

    #[test]
    fn test_reminders_for_pinned_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (_dir, session) = session(today);
        let mut store = session.load_store().unwrap();
        store
            .schedule("2024-03-10", "Grandma's Birthday", EventFlags::BIRTHDAY)
            .unwrap();
        session.save_store(&store).unwrap();

        let due = due_today(&session.load_store().unwrap(), session.today());

        let kinds: Vec<_> = due.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, [ReminderKind::Birthday, ReminderKind::Event]);
        run(&session, None).unwrap();
    }
}
