use anyhow::Result;
use chrono::NaiveDate;
use deskcal_core::YearMonth;

use crate::render::render_month;
use crate::session::Session;

pub fn run(session: &Session, month: Option<&str>, next: bool, prev: bool) -> Result<()> {
    let today = session.today();
    let month = resolve_month(month, next, prev, today)?;

    let store = session.load_store()?;
    let events = store.events_for_month(month.year(), month.month());

    println!("{}", render_month(month, &events, today));
    Ok(())
}

/// The month to display: the given one or today's, shifted by --next/--prev.
fn resolve_month(month: Option<&str>, next: bool, prev: bool, today: NaiveDate) -> Result<YearMonth> {
    let month = match month {
        Some(s) => YearMonth::parse(s)?,
        None => YearMonth::of(today),
    };

    Ok(match (next, prev) {
        (true, false) => month.next(),
        (false, true) => month.prev(),
        _ => month,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn test_defaults_to_current_month() {
        assert_eq!(
            resolve_month(None, false, false, today()).unwrap(),
            YearMonth::new(2024, 12).unwrap()
        );
    }

    #[test]
    fn test_next_and_prev_cross_year() {
        assert_eq!(
            resolve_month(None, true, false, today()).unwrap(),
            YearMonth::new(2025, 1).unwrap()
        );
        assert_eq!(
            resolve_month(Some("2024-01"), false, true, today()).unwrap(),
            YearMonth::new(2023, 12).unwrap()
        );
    }

    #[test]
    fn test_invalid_month_argument() {
        assert!(resolve_month(Some("2024-13"), false, false, today()).is_err());
    }
}
