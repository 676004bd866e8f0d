mod codec;
mod entry;
mod fixed_text;
mod weekday;

pub use codec::{MalformedRecord, RECORD_SIZE, decode, encode};
pub use entry::{CONTENT_SIZE, DATE_SIZE, Entry, IMAGE_PATH_SIZE, WEATHER_SIZE, WEEKDAY_SIZE};
pub use fixed_text::FixedText;
pub use weekday::derive_weekday;
