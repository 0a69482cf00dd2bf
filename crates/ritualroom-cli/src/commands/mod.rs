pub mod calendar;
pub mod config;
pub mod day;
pub mod export;
pub mod journal;
pub mod stats;
pub mod template;

use chrono::NaiveTime;
use ritualroom_core::date_key::days_in_month;
use ritualroom_core::{BlobStore, Config, DateKey, Database, MemoryBlobStore, Tracker};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the tracker described by the config.
///
/// A database that cannot be opened degrades to an in-memory session.
pub fn open_tracker(config: &Config) -> Result<Tracker<Box<dyn BlobStore>>, Box<dyn std::error::Error>> {
    let template = config.template()?;
    let opened = match config.database_path() {
        Some(path) => Database::open_at(path),
        None => Database::open(),
    };
    let backend: Box<dyn BlobStore> = match opened {
        Ok(db) => Box::new(db),
        Err(err) => {
            tracing::error!(error = %err, "database unavailable; changes will not be saved");
            Box::new(MemoryBlobStore::new())
        }
    };
    Ok(Tracker::open(backend, template))
}

/// `--date` value (`today`, `yesterday`, `tomorrow` or `YYYY-MM-DD`),
/// defaulting to today.
pub fn parse_date(date: Option<&str>) -> Result<DateKey, Box<dyn std::error::Error>> {
    match date {
        None | Some("today") => Ok(DateKey::today()),
        Some("yesterday") => DateKey::today()
            .previous()
            .ok_or_else(|| "no day before today".into()),
        Some("tomorrow") => DateKey::today()
            .next()
            .ok_or_else(|| "no day after today".into()),
        Some(raw) => Ok(raw.parse::<DateKey>()?),
    }
}

/// `--month YYYY-MM` value, defaulting to the current month.
pub fn parse_month(month: Option<&str>) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let Some(raw) = month else {
        let today = DateKey::today();
        return Ok((today.year(), today.month()));
    };
    let (year, month) = raw
        .split_once('-')
        .ok_or_else(|| format!("invalid month '{raw}': expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid month '{raw}': expected YYYY-MM"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month '{raw}': expected YYYY-MM"))?;
    days_in_month(year, month)?;
    Ok((year, month))
}

/// Render a stored `HH:MM` value for display.
pub fn display_time(value: &str, hour12: bool) -> String {
    match NaiveTime::parse_from_str(value, "%H:%M") {
        Ok(time) if hour12 => time.format("%-I:%M %p").to_string(),
        Ok(time) => time.format("%H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}
