use std::path::Path;

use anyhow::{Context, Result};
use deskcal_core::codec;
use owo_colors::OwoColorize;

use crate::session::Session;

/// Replaces everything in the configured events file.
pub fn run(session: &Session, path: &Path) -> Result<()> {
    let mut store = session.config.new_store()?;

    let count = codec::load(&mut store, path)
        .with_context(|| format!("Failed to load events from {}", path.display()))?;
    session.save_store(&store)?;

    println!(
        "{} Events loaded from {} ({} {}).",
        "✓".green(),
        path.display(),
        count,
        if count == 1 { "date" } else { "dates" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::session;
    use chrono::NaiveDate;
    use deskcal_core::EventFlags;

    #[test]
    fn test_import_replaces_then_export_writes_same_lines() {
        let (dir, session) = session(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let mut store = session.load_store().unwrap();
        store.schedule("2024-01-01", "Old", EventFlags::NONE).unwrap();
        session.save_store(&store).unwrap();

        let source = dir.path().join("backup.txt");
        std::fs::write(&source, "2024-03-10|True|False|Grandma's Birthday\n").unwrap();
        run(&session, &source).unwrap();

        let store = session.load_store().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.birthdays_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));

        let exported = dir.path().join("exported.txt");
        crate::commands::export::run(&session, &exported).unwrap();
        assert_eq!(
            std::fs::read_to_string(&exported).unwrap(),
            std::fs::read_to_string(&source).unwrap()
        );
    }

    #[test]
    fn test_failed_import_keeps_events_file() {
        let (dir, session) = session(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let mut store = session.load_store().unwrap();
        store.schedule("2024-01-01", "Keep me", EventFlags::NONE).unwrap();
        session.save_store(&store).unwrap();

        let source = dir.path().join("broken.txt");
        std::fs::write(&source, "2024-03-10|True\n").unwrap();

        assert!(run(&session, &source).is_err());
        assert_eq!(session.load_store().unwrap().len(), 1);
    }
}
