use ritualroom_core::{Config, DateKey};

use super::{open_tracker, parse_month, CliResult};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn run(month: Option<String>, json: bool, config: &Config) -> CliResult {
    let tracker = open_tracker(config)?;
    let (year, month) = parse_month(month.as_deref())?;
    let summary = tracker.month_summary(year, month, DateKey::today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let title = summary
        .days
        .first()
        .map(|d| d.date.date().format("%B %Y").to_string())
        .unwrap_or_default();
    println!("{title}");
    println!("{}", WEEKDAYS.map(|d| format!("{d:>5}")).concat());

    let mut line = "     ".repeat(summary.leading_blanks as usize);
    let mut column = summary.leading_blanks;
    for day in &summary.days {
        let marker = if day.is_today { '*' } else { ' ' };
        line.push_str(&format!("{:>2}{}{} ", day.date.day(), day.level.glyph(), marker));
        column += 1;
        if column == 7 {
            println!("{}", line.trim_end());
            line.clear();
            column = 0;
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    println!();
    println!(
        "{} tracked, {} fully completed, streak {}",
        summary.tracked_days,
        summary.completed_days,
        tracker.streak()
    );
    Ok(())
}
