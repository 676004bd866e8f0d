use chrono::{Days, Local, NaiveDate};

/// Canonical text form of a stored date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for new entries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// The local calendar date of the machine.
    #[default]
    System,
    /// Always the given date. Used to replay a day in tests.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Resolves a date argument against `today`.
///
/// Accepts `YYYY-MM-DD`, `today` and `yesterday` (case-insensitive, surrounding
/// whitespace ignored). Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use nostalgia_core::dates::resolve_date;
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// assert_eq!(resolve_date("yesterday", today), NaiveDate::from_ymd_opt(2024, 2, 29));
/// assert_eq!(resolve_date("2023-12-25", today), NaiveDate::from_ymd_opt(2023, 12, 25));
/// assert_eq!(resolve_date("last tuesday", today), None);
/// ```
pub fn resolve_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let token = input.trim().to_lowercase();
    match token.as_str() {
        "today" => Some(today),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => NaiveDate::parse_from_str(&token, DATE_FORMAT).ok(),
    }
}

/// Formats `date` in the canonical stored form.
pub fn canonical(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = Clock::Fixed(d(2024, 3, 1));
        assert_eq!(clock.today(), d(2024, 3, 1));
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn system_clock_matches_local_date() {
        assert_eq!(Clock::System.today(), Local::now().date_naive());
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let today = d(2025, 1, 1);
        assert_eq!(resolve_date(" Today ", today), Some(today));
        assert_eq!(resolve_date("YESTERDAY", today), Some(d(2024, 12, 31)));
    }

    #[test]
    fn iso_dates_are_parsed() {
        assert_eq!(resolve_date("2024-03-02", d(2025, 1, 1)), Some(d(2024, 3, 2)));
    }

    #[test]
    fn other_formats_are_rejected() {
        let today = d(2025, 1, 1);
        assert_eq!(resolve_date("01/03/2024", today), None);
        assert_eq!(resolve_date("2024-02-30", today), None);
        assert_eq!(resolve_date("", today), None);
    }

    #[test]
    fn canonical_is_zero_padded() {
        assert_eq!(canonical(d(2024, 3, 1)), "2024-03-01");
    }
}
