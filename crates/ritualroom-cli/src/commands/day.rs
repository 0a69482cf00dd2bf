use chrono::NaiveTime;
use clap::Subcommand;
use ritualroom_core::{Config, RitualKind};

use super::{display_time, open_tracker, parse_date, CliResult};

#[derive(Subcommand)]
pub enum DayAction {
    /// Show a day's rituals and progress
    Show {
        /// Day to show (YYYY-MM-DD, "today", "yesterday" or "tomorrow")
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a checkbox ritual as done
    Check {
        /// Ritual id (see `template list`)
        id: String,
        #[arg(long)]
        date: Option<String>,
        /// Mark as not done instead
        #[arg(long)]
        undo: bool,
    },
    /// Set the time of a time ritual
    Time {
        /// Ritual id (see `template list`)
        id: String,
        /// Time as HH:MM; an empty string clears it
        value: String,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: DayAction, config: &Config) -> CliResult {
    let mut tracker = open_tracker(config)?;

    match action {
        DayAction::Show { date, json } => {
            let date = parse_date(date.as_deref())?;
            let snapshot = tracker.snapshot(&date);
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }

            println!("{}", date.date().format("%A, %B %-d, %Y"));
            println!("Progress: {}%", snapshot.progress);
            for ritual in &snapshot.rituals {
                let mark = if ritual.completed() { "x" } else { " " };
                match (ritual.kind(), ritual.value()) {
                    (RitualKind::Time, Some(value)) if !value.is_empty() => println!(
                        "[{mark}] {:<32} {}",
                        ritual.name,
                        display_time(value, config.display.hour12)
                    ),
                    (RitualKind::Time, _) => println!("[{mark}] {:<32} --:--", ritual.name),
                    (RitualKind::Checkbox, _) => println!("[{mark}] {}", ritual.name),
                }
            }
            if let Some(journal) = snapshot.journal.as_deref().filter(|j| !j.is_empty()) {
                println!();
                println!("Journal: {journal}");
            }
        }
        DayAction::Check { id, date, undo } => {
            let date = parse_date(date.as_deref())?;
            let ritual = tracker
                .day(&date)
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| format!("unknown ritual: {id}"))?;
            if ritual.kind() != RitualKind::Checkbox {
                return Err(format!("'{id}' is a time ritual; use `day time {id} HH:MM`").into());
            }
            tracker.set_ritual(&date, &id, !undo, None);
            println!("{} {}: {}", date, ritual.name, if undo { "not done" } else { "done" });
        }
        DayAction::Time { id, value, date } => {
            let date = parse_date(date.as_deref())?;
            let ritual = tracker
                .day(&date)
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| format!("unknown ritual: {id}"))?;
            if ritual.kind() != RitualKind::Time {
                return Err(format!("'{id}' is a checkbox ritual; use `day check {id}`").into());
            }
            let value = value.trim().to_string();
            if !value.is_empty() {
                NaiveTime::parse_from_str(&value, "%H:%M")
                    .map_err(|_| format!("invalid time '{value}': expected HH:MM"))?;
            }
            let completed = !value.is_empty();
            tracker.set_ritual(&date, &id, completed, Some(value.clone()));
            if completed {
                println!("{} {}: {}", date, ritual.name, display_time(&value, config.display.hour12));
            } else {
                println!("{} {}: cleared", date, ritual.name);
            }
        }
    }
    Ok(())
}
