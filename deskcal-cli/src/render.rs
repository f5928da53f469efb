//! Terminal rendering for deskcal types.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use deskcal_core::date::format_date;
use deskcal_core::{EventRecord, Reminder, ReminderKind, YearMonth};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Reminder {
    fn render(&self) -> String {
        let tag = match self.kind {
            ReminderKind::Birthday => "🎂",
            ReminderKind::Event => "•",
            ReminderKind::Recurring => "↻",
        };
        format!("{} {} {}", tag, self.text, format!("[{}]", self.kind).dimmed())
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let mut lines = vec![format_date(self.date).bold().to_string()];

        let mut flags = Vec::new();
        if self.is_birthday {
            flags.push("birthday");
        }
        if self.is_recurring {
            flags.push("recurring");
        }
        if !flags.is_empty() {
            lines.push(format!("  {}", flags.join(", ").dimmed()));
        }

        for event in &self.events {
            lines.push(format!("  • {event}"));
        }
        lines.join("\n")
    }
}

/// Weeks of `month`, Monday first. Days outside the month are None.
pub fn month_weeks(month: YearMonth) -> Vec<[Option<u32>; 7]> {
    let offset = month.first_day().weekday().num_days_from_monday() as usize;
    let days = month.days_in_month();

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;

    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    weeks
}

/// Month grid followed by the month's events.
///
/// Days with events are underlined, today is highlighted.
pub fn render_month(month: YearMonth, events: &BTreeMap<u32, String>, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("{:^20}", month.to_string()).bold().to_string(),
        "Mo Tu We Th Fr Sa Su".dimmed().to_string(),
    ];

    for week in month_weeks(month) {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                None => "  ".to_string(),
                Some(day) => {
                    let cell = format!("{day:>2}");
                    let is_today = month.contains(today) && today.day() == *day;
                    match (is_today, events.contains_key(day)) {
                        (true, _) => cell.reversed().to_string(),
                        (false, true) => cell.underline().green().to_string(),
                        (false, false) => cell,
                    }
                }
            })
            .collect();
        lines.push(cells.join(" "));
    }

    if events.is_empty() {
        lines.push(String::new());
        lines.push("No events this month".dimmed().to_string());
    } else {
        lines.push(String::new());
        for (day, summary) in events {
            lines.push(format!("{:>2}  {}", day.bold(), summary));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_weeks_start_on_monday() {
        // 2024-03-01 is a Friday
        let weeks = month_weeks(YearMonth::new(2024, 3).unwrap());

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(weeks[4][0], Some(25));
        assert_eq!(weeks[4][6], Some(31));
    }

    #[test]
    fn test_month_weeks_spill_into_sixth_week() {
        // 2024-09-01 is a Sunday
        let weeks = month_weeks(YearMonth::new(2024, 9).unwrap());

        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][6], Some(1));
        assert_eq!(weeks[5], [Some(30), None, None, None, None, None, None]);
    }

    #[test]
    fn test_month_weeks_cover_every_day_once() {
        let month = YearMonth::new(2024, 2).unwrap();
        let days: Vec<u32> = month_weeks(month).into_iter().flatten().flatten().collect();

        assert_eq!(days, (1..=29).collect::<Vec<_>>());
    }

    #[test]
    fn test_render_month_lists_events() {
        let month = YearMonth::new(2024, 3).unwrap();
        let events = BTreeMap::from([(10, "Grandma's Birthday, Cake".to_string())]);
        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let output = render_month(month, &events, today);

        assert!(output.contains("March 2024"));
        assert!(output.contains("Grandma's Birthday, Cake"));
        assert!(!output.contains("No events this month"));
    }
}
