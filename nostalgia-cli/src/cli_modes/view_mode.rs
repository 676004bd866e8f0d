use crate::{
    cli::{Style, ViewArgs},
    render::Renderer,
};
use anyhow::{Result, anyhow};
use nostalgia_core::{Entry, Nostalgia, dates::canonical};

/// Every record of one day, keyed by its `YYYY-MM-DD` text.
#[derive(Debug)]
struct DayView {
    key: String,
    entries: Vec<Entry>,
}

pub fn view_mode(args: &ViewArgs, renderer: &Renderer, nostalgia: &Nostalgia) -> Result<()> {
    let day = load_day(&args.date, nostalgia)?;

    if args.style == Style::Raw {
        renderer.print_entries(&day.entries, Style::Raw);
        return Ok(());
    }
    if day.entries.is_empty() {
        renderer.print_info(&no_records_notice(&day.key));
    } else {
        renderer.print_entries(&day.entries, args.style);
    }
    Ok(())
}

/// Resolves `date_arg` and reads its records. No match is an empty day;
/// a missing data file is an error with a hint.
fn load_day(date_arg: &str, nostalgia: &Nostalgia) -> Result<DayView> {
    let date = nostalgia.resolve_date(date_arg).ok_or_else(|| {
        anyhow!("'{date_arg}' is not a valid date; use YYYY-MM-DD, today or yesterday")
    })?;
    let key = canonical(date);

    let entries = match nostalgia.store.query(&key) {
        Ok(entries) => entries,
        Err(e) if e.is_missing() => {
            return Err(anyhow::Error::new(e).context(format!(
                "nothing has been saved yet; `nostalgia save` creates {}",
                nostalgia.store.path().display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(DayView { key, entries })
}

fn no_records_notice(key: &str) -> String {
    format!("No records found for {key}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nostalgia_core::{Clock, Config, StoreError};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn mk_nostalgia(data_file: PathBuf) -> Nostalgia {
        let config = Config {
            data_file,
            password: None,
            editor: None,
            date_format: "%d %b %Y".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Nostalgia::with_clock(config, Clock::Fixed(today)).unwrap()
    }

    #[test]
    fn day_without_records_is_empty_not_error() {
        let tmp = tempdir().unwrap();
        let nostalgia = mk_nostalgia(tmp.path().join("diary.dat"));
        nostalgia.store.append("Sunny", "only on the first").unwrap();

        let day = load_day("2024-03-02", &nostalgia).unwrap();
        assert_eq!(day.key, "2024-03-02");
        assert!(day.entries.is_empty());
        assert_eq!(
            no_records_notice(&day.key),
            "No records found for 2024-03-02."
        );
    }

    #[test]
    fn day_with_records_keeps_write_order() {
        let tmp = tempdir().unwrap();
        let nostalgia = mk_nostalgia(tmp.path().join("diary.dat"));
        nostalgia.store.append("Sunny", "first").unwrap();
        nostalgia.store.append("Rain", "second").unwrap();

        let day = load_day("today", &nostalgia).unwrap();
        assert_eq!(day.key, "2024-03-01");
        let contents: Vec<_> = day.entries.iter().map(|e| e.content()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[test]
    fn missing_data_file_is_an_error_with_a_hint() {
        let tmp = tempdir().unwrap();
        let nostalgia = mk_nostalgia(tmp.path().join("diary.dat"));

        let err = load_day("2024-03-01", &nostalgia).unwrap_err();
        assert!(err.to_string().contains("nothing has been saved yet"));
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert!(store_err.is_missing());
    }

    #[test]
    fn bad_date_argument_is_an_error() {
        let tmp = tempdir().unwrap();
        let nostalgia = mk_nostalgia(tmp.path().join("diary.dat"));
        nostalgia.store.append("Sunny", "x").unwrap();

        let err = load_day("01/03/2024", &nostalgia).unwrap_err();
        assert!(err.to_string().contains("not a valid date"));
    }
}
