use clap::Subcommand;
use ritualroom_core::Config;

use super::{open_tracker, parse_date, CliResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Print a day's journal entry
    Show {
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace a day's journal entry
    Set {
        /// Journal text
        text: String,
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: JournalAction, config: &Config) -> CliResult {
    let mut tracker = open_tracker(config)?;

    match action {
        JournalAction::Show { date } => {
            let date = parse_date(date.as_deref())?;
            println!("{}", tracker.journal(&date).unwrap_or_default());
        }
        JournalAction::Set { text, date } => {
            let date = parse_date(date.as_deref())?;
            tracker.set_journal(&date, text);
            println!("journal saved for {date}");
        }
    }
    Ok(())
}
