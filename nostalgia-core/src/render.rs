//! Pure text rendering of entries.
//!
//! Day header:  `# Friday, 01 Mar 2024 - 2 records`
//! Entry block:
//!   ## Record 1 (Sunny)
//!
//!   Body…
//!
//! Raw block (one `KEY:value` per line, for scripts):
//!   DATE:2024-03-01
//!   WEEKDAY:Friday
//!   WEATHER:Sunny
//!   CONTENT:Body with \n escaped

use crate::{dates::canonical, record::Entry};
use chrono::NaiveDate;
use std::fmt::Write;

/// `# Friday, 01 Mar 2024 - 2 records`
///
/// A `date_format` chrono cannot render falls back to `YYYY-MM-DD`.
pub fn format_day_header(
    date: NaiveDate,
    weekday: &str,
    count: usize,
    date_format: &str,
) -> String {
    let noun = if count == 1 { "record" } else { "records" };
    let mut when = String::new();
    if write!(when, "{}", date.format(date_format)).is_err() {
        when = canonical(date);
    }
    format!("# {weekday}, {when} - {count} {noun}")
}

/// Render one entry of a day. `number` starts at 1.
pub fn format_entry_block(number: usize, entry: &Entry) -> String {
    let heading = if entry.weather().trim().is_empty() {
        format!("## Record {number}")
    } else {
        format!("## Record {number} ({})", entry.weather().trim())
    };
    let body = entry.content().trim_end_matches('\n');
    if body.trim().is_empty() {
        format!("{heading}\n\n")
    } else {
        format!("{heading}\n\n{body}\n\n")
    }
}

/// `2024-03-01 Friday [Sunny] first line of the body`
pub fn format_entry_line(entry: &Entry) -> String {
    let first_line = entry.content().lines().next().unwrap_or_default().trim();
    let weather = entry.weather().trim();
    match (weather.is_empty(), first_line.is_empty()) {
        (true, true) => format!("{} {}", entry.date(), entry.weekday()),
        (true, false) => format!("{} {} {first_line}", entry.date(), entry.weekday()),
        (false, true) => format!("{} {} [{weather}]", entry.date(), entry.weekday()),
        (false, false) => format!(
            "{} {} [{weather}] {first_line}",
            entry.date(),
            entry.weekday()
        ),
    }
}

/// Render an entry as `KEY:value` lines. Backslashes and newlines in values are escaped.
pub fn format_raw_entry(entry: &Entry) -> String {
    format!(
        "DATE:{}\nWEEKDAY:{}\nWEATHER:{}\nCONTENT:{}\n",
        escape(entry.date()),
        escape(entry.weekday()),
        escape(entry.weather()),
        escape(entry.content()),
    )
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}
