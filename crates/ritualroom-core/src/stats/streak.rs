//! Consecutive fully-completed days.
//!
//! The count ends at today when today is fully completed, otherwise at
//! yesterday. An unfinished today never breaks the streak; any earlier day
//! that is missing, empty or partially completed does.

use crate::date_key::DateKey;
use crate::store::DayStore;

/// Streak length as of `today`.
///
/// Works on stored rituals only. A day with no stored rituals never counts.
pub fn current_streak(store: &DayStore, today: DateKey) -> u32 {
    let today_done = store.get(&today).is_some_and(|r| r.is_fully_completed());

    let mut check = if today_done {
        Some(today)
    } else {
        today.previous()
    };

    let mut streak = 0;
    while let Some(date) = check {
        if !store.get(&date).is_some_and(|r| r.is_fully_completed()) {
            break;
        }
        streak += 1;
        check = date.previous();
    }
    streak
}
