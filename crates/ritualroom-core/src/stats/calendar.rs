//! Month grid of stored progress.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::progress::{exact_progress, ProgressLevel};
use crate::date_key::{month_keys, DateKey};
use crate::error::ValidationError;
use crate::store::DayStore;

/// One day cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: DateKey,
    /// Unrounded percentage over the stored rituals, `None` when untracked
    pub progress: Option<f64>,
    pub level: ProgressLevel,
    pub is_today: bool,
}

/// Progress overview of a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// Weekday offset of the first day, Sunday = 0
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    /// Days with a record
    pub tracked_days: u32,
    /// Days where every stored ritual is completed
    pub completed_days: u32,
}

/// Build the month grid as seen on `today`.
pub fn month_summary(
    year: i32,
    month: u32,
    store: &DayStore,
    today: DateKey,
) -> Result<MonthSummary, ValidationError> {
    let keys = month_keys(year, month)?;
    let leading_blanks = keys
        .first()
        .map(|first| first.date().weekday().num_days_from_sunday())
        .unwrap_or(0);

    let mut tracked_days = 0;
    let mut completed_days = 0;
    let days: Vec<CalendarDay> = keys
        .into_iter()
        .map(|date| {
            let record = store.get(&date);
            if let Some(record) = record {
                tracked_days += 1;
                if record.is_fully_completed() {
                    completed_days += 1;
                }
            }
            let progress = record.map(|r| exact_progress(&r.rituals));
            CalendarDay {
                date,
                progress,
                level: ProgressLevel::from_progress(progress),
                is_today: date == today,
            }
        })
        .collect();

    Ok(MonthSummary {
        year,
        month,
        leading_blanks,
        days,
        tracked_days,
        completed_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ritual::RitualState;
    use crate::store::DayRecord;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let summary = month_summary(2024, 6, &DayStore::new(), key("2024-06-10")).unwrap();
        assert_eq!(summary.leading_blanks, 6);
        assert_eq!(summary.days.len(), 30);
        assert!(summary.days[9].is_today);
        assert!(summary.days.iter().all(|d| d.level == ProgressLevel::Untracked));
    }

    #[test]
    fn uses_unrounded_stored_progress() {
        let mut store = DayStore::new();
        store.insert(
            key("2024-06-03"),
            DayRecord {
                rituals: vec![
                    RitualState::checkbox("a", "A", true),
                    RitualState::checkbox("b", "B", false),
                    RitualState::checkbox("c", "C", false),
                ],
                journal: None,
            },
        );
        store.insert(
            key("2024-06-04"),
            DayRecord {
                rituals: vec![RitualState::checkbox("a", "A", true)],
                journal: None,
            },
        );
        store.insert(key("2024-06-05"), DayRecord::default());

        let summary = month_summary(2024, 6, &store, key("2024-06-30")).unwrap();
        let third = &summary.days[2];
        assert!((third.progress.unwrap() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(third.level, ProgressLevel::Low);
        assert_eq!(summary.days[3].level, ProgressLevel::High);
        assert_eq!(summary.days[4].progress, Some(0.0));
        assert_eq!(summary.days[4].level, ProgressLevel::Zero);
        assert_eq!(summary.tracked_days, 3);
        assert_eq!(summary.completed_days, 1);
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(month_summary(2024, 0, &DayStore::new(), key("2024-06-10")).is_err());
    }
}
