use chrono::{Datelike, NaiveDate};

/// Weekday labels indexed by days from Sunday.
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the English weekday label of `date` (`"Sunday"` .. `"Saturday"`).
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use nostalgia_core::record::derive_weekday;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(derive_weekday(date), "Friday");
/// ```
pub fn derive_weekday(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn sunday_and_monday() {
        assert_eq!(derive_weekday(day("2024-01-07")), "Sunday");
        assert_eq!(derive_weekday(day("2024-01-08")), "Monday");
    }

    #[test]
    fn full_week_in_order() {
        let labels: Vec<_> = (7..14)
            .map(|d| derive_weekday(NaiveDate::from_ymd_opt(2024, 1, d).unwrap()))
            .collect();
        assert_eq!(labels, WEEKDAYS);
    }

    #[test]
    fn leap_day() {
        assert_eq!(derive_weekday(day("2024-02-29")), "Thursday");
    }

    #[test]
    fn every_label_fits_the_weekday_field() {
        for label in WEEKDAYS {
            assert!(label.len() < crate::record::WEEKDAY_SIZE);
        }
    }
}
