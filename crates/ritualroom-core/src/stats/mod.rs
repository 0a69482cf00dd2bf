//! Statistics derived from day records.
//!
//! - **Progress**: completion percentage of a day
//! - **Streak**: run of fully-completed days ending today or yesterday
//! - **Calendar**: month grid of stored progress with heat levels

mod calendar;
mod progress;
mod streak;

pub use calendar::{month_summary, CalendarDay, MonthSummary};
pub use progress::{day_progress, exact_progress, ProgressLevel};
pub use streak::current_streak;
