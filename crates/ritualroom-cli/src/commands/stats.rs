use clap::Subcommand;
use ritualroom_core::{Config, DateKey};
use serde_json::json;

use super::{open_tracker, parse_date, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak of fully completed days
    Streak,
    /// Completion percentage of a day
    Progress {
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: StatsAction, config: &Config) -> CliResult {
    let tracker = open_tracker(config)?;

    match action {
        StatsAction::Streak => {
            let today = DateKey::today();
            let stats = json!({
                "as_of": today,
                "streak": tracker.streak_as_of(today),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Progress { date } => {
            let date = parse_date(date.as_deref())?;
            let rituals = tracker.day(&date);
            let stats = json!({
                "date": date,
                "completed": rituals.iter().filter(|r| r.completed()).count(),
                "total": rituals.len(),
                "progress": tracker.progress(&date),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
