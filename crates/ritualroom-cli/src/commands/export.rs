use ritualroom_core::{export_file_name, Config};
use std::path::PathBuf;

use super::{open_tracker, parse_month, CliResult};

pub fn run(month: Option<String>, out: Option<PathBuf>, config: &Config) -> CliResult {
    let tracker = open_tracker(config)?;
    let (year, month) = parse_month(month.as_deref())?;
    let csv = tracker.export_month(year, month)?;

    let path = match out {
        Some(path) if path.is_dir() => path.join(export_file_name(year, month)),
        Some(path) => path,
        None => PathBuf::from(export_file_name(year, month)),
    };
    std::fs::write(&path, csv)?;
    tracing::info!(path = %path.display(), "export written");
    println!("{}", path.display());
    Ok(())
}
