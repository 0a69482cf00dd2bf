//! Monthly CSV export.
//!
//! Layout: a `Date` column, one column per template ritual (display name as
//! header, template order), then `Journal`. Every day of the month gets a row.
//! Only the journal field is quoted; ritual names and values are written
//! as-is.

use crate::date_key::month_keys;
use crate::error::ValidationError;
use crate::ritual::{RitualKind, Template};
use crate::store::{DayRecord, DayStore};

/// Render a month of records as CSV text. Rows are separated by `\n`, with
/// no trailing newline.
pub fn export_month(
    year: i32,
    month: u32,
    store: &DayStore,
    template: &Template,
) -> Result<String, ValidationError> {
    let keys = month_keys(year, month)?;

    let mut header = Vec::with_capacity(template.len() + 2);
    header.push("Date".to_string());
    header.extend(template.iter().map(|r| r.name.clone()));
    header.push("Journal".to_string());

    let mut rows = Vec::with_capacity(keys.len() + 1);
    rows.push(header.join(","));

    for key in keys {
        let mut row = Vec::with_capacity(template.len() + 2);
        row.push(key.to_string());
        match store.get(&key) {
            Some(record) => {
                row.extend(template.iter().map(|def| ritual_cell(record, &def.id)));
                row.push(journal_cell(record.journal.as_deref()));
            }
            None => {
                row.extend(std::iter::repeat(String::new()).take(template.len() + 1));
            }
        }
        rows.push(row.join(","));
    }

    Ok(rows.join("\n"))
}

/// Download name for a month's export, e.g. `rituals-2024-06.csv`.
pub fn export_file_name(year: i32, month: u32) -> String {
    format!("rituals-{year}-{month:02}.csv")
}

fn ritual_cell(record: &DayRecord, id: &str) -> String {
    let Some(ritual) = record.ritual(id) else {
        return String::new();
    };
    match ritual.kind() {
        RitualKind::Checkbox => {
            let cell = if ritual.completed() { "Yes" } else { "No" };
            cell.to_string()
        }
        RitualKind::Time => ritual.value().unwrap_or_default().to_string(),
    }
}

fn journal_cell(journal: Option<&str>) -> String {
    match journal {
        Some(text) if !text.is_empty() => format!("\"{}\"", text.replace('"', "\"\"")),
        _ => String::new(),
    }
}
