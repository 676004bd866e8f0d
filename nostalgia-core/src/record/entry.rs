use super::fixed_text::FixedText;
use super::weekday::derive_weekday;
use crate::dates::DATE_FORMAT;
use chrono::NaiveDate;

/// Width of the `date` field: `YYYY-MM-DD` plus terminator.
pub const DATE_SIZE: usize = 11;
/// Width of the `content` field.
pub const CONTENT_SIZE: usize = 4096;
/// Width of the `weekday` field.
pub const WEEKDAY_SIZE: usize = 10;
/// Width of the `weather` field.
pub const WEATHER_SIZE: usize = 32;
/// Width of the reserved `image_path` field.
pub const IMAGE_PATH_SIZE: usize = 256;

/// One journal record.
///
/// The weekday is always derived from the date, so the fields are only
/// reachable through accessors. New entries come from
/// [`Store::append`](crate::Store::append), dated by the store's clock;
/// callers cannot pick the date:
///
/// ```compile_fail
/// let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let _ = nostalgia_core::Entry::new(day, "Sunny", "backdated");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub(crate) date: FixedText<DATE_SIZE>,
    pub(crate) content: FixedText<CONTENT_SIZE>,
    pub(crate) weekday: FixedText<WEEKDAY_SIZE>,
    pub(crate) weather: FixedText<WEATHER_SIZE>,
    pub(crate) image_path: FixedText<IMAGE_PATH_SIZE>,
}

impl Entry {
    /// Builds an entry for `date`. Weather and content are truncated to their
    /// field capacity; the image path is left empty.
    pub(crate) fn new(date: NaiveDate, weather: &str, content: &str) -> Self {
        Self {
            date: FixedText::new(&date.format(DATE_FORMAT).to_string()),
            content: FixedText::new(content),
            weekday: FixedText::new(derive_weekday(date)),
            weather: FixedText::new(weather),
            image_path: FixedText::default(),
        }
    }

    /// Canonical `YYYY-MM-DD` text, as stored.
    pub fn date(&self) -> &str {
        self.date.as_str()
    }

    /// The stored date parsed back into a calendar date, if it is well formed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date(), DATE_FORMAT).ok()
    }

    pub fn weekday(&self) -> &str {
        self.weekday.as_str()
    }

    pub fn weather(&self) -> &str {
        self.weather.as_str()
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn image_path(&self) -> &str {
        self.image_path.as_str()
    }
}
