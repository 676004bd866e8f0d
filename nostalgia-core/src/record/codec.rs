//! Fixed-width binary layout of one [`Entry`].
//!
//! Fields are laid out back to back, each zero-filled to its width:
//!
//! | field      | offset | width |
//! |------------|--------|-------|
//! | date       | 0      | 11    |
//! | content    | 11     | 4096  |
//! | weekday    | 4107   | 10    |
//! | weather    | 4117   | 32    |
//! | image_path | 4149   | 256   |
//!
//! There is no header, length prefix or checksum. A data file is valid
//! exactly when its length is a multiple of [`RECORD_SIZE`].

use super::entry::{CONTENT_SIZE, DATE_SIZE, Entry, IMAGE_PATH_SIZE, WEATHER_SIZE, WEEKDAY_SIZE};
use super::fixed_text::FixedText;

const DATE_OFFSET: usize = 0;
const CONTENT_OFFSET: usize = DATE_OFFSET + DATE_SIZE;
const WEEKDAY_OFFSET: usize = CONTENT_OFFSET + CONTENT_SIZE;
const WEATHER_OFFSET: usize = WEEKDAY_OFFSET + WEEKDAY_SIZE;
const IMAGE_PATH_OFFSET: usize = WEATHER_OFFSET + WEATHER_SIZE;

/// Size in bytes of one encoded entry.
pub const RECORD_SIZE: usize = IMAGE_PATH_OFFSET + IMAGE_PATH_SIZE;

const _: () = assert!(RECORD_SIZE == 4405);

/// A block handed to [`decode`] was not exactly [`RECORD_SIZE`] bytes.
#[derive(Debug, thiserror::Error)]
#[error("malformed record: expected {} bytes, got {len}", RECORD_SIZE)]
pub struct MalformedRecord {
    pub len: usize,
}

/// Encodes `entry` into its fixed-width block.
pub fn encode(entry: &Entry) -> [u8; RECORD_SIZE] {
    let mut block = [0u8; RECORD_SIZE];
    entry.date.write_to(&mut block[DATE_OFFSET..CONTENT_OFFSET]);
    entry
        .content
        .write_to(&mut block[CONTENT_OFFSET..WEEKDAY_OFFSET]);
    entry
        .weekday
        .write_to(&mut block[WEEKDAY_OFFSET..WEATHER_OFFSET]);
    entry
        .weather
        .write_to(&mut block[WEATHER_OFFSET..IMAGE_PATH_OFFSET]);
    entry
        .image_path
        .write_to(&mut block[IMAGE_PATH_OFFSET..RECORD_SIZE]);
    block
}

/// Decodes one block produced by [`encode`].
///
/// # Errors
///
/// Returns [`MalformedRecord`] if `block` is not exactly [`RECORD_SIZE`] bytes.
pub fn decode(block: &[u8]) -> Result<Entry, MalformedRecord> {
    if block.len() != RECORD_SIZE {
        return Err(MalformedRecord { len: block.len() });
    }
    Ok(Entry {
        date: FixedText::read_from(&block[DATE_OFFSET..CONTENT_OFFSET]),
        content: FixedText::read_from(&block[CONTENT_OFFSET..WEEKDAY_OFFSET]),
        weekday: FixedText::read_from(&block[WEEKDAY_OFFSET..WEATHER_OFFSET]),
        weather: FixedText::read_from(&block[WEATHER_OFFSET..IMAGE_PATH_OFFSET]),
        image_path: FixedText::read_from(&block[IMAGE_PATH_OFFSET..RECORD_SIZE]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn friday(weather: &str, content: &str) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            weather,
            content,
        )
    }

    #[test]
    fn round_trip_preserves_fields() {
        let e = friday("Sunny", "First entry\nwith two lines, ünïcödé and 日记");
        let decoded = decode(&encode(&e)).unwrap();
        assert_eq!(decoded, e);
    }

    #[test]
    fn round_trip_of_empty_fields() {
        let e = friday("", "");
        assert_eq!(decode(&encode(&e)).unwrap(), e);
    }

    #[test]
    fn fields_sit_at_their_offsets() {
        let block = encode(&friday("Sunny", "Body"));
        assert_eq!(&block[0..11], b"2024-03-01\0");
        assert_eq!(&block[11..15], b"Body");
        assert_eq!(&block[4107..4113], b"Friday");
        assert_eq!(&block[4117..4122], b"Sunny");
        assert!(block[4149..].iter().all(|&b| b == 0));
    }

    #[test]
    fn unused_bytes_are_zero_filled() {
        let block = encode(&friday("Sunny", "Body"));
        assert!(block[15..WEEKDAY_OFFSET].iter().all(|&b| b == 0));
        assert!(block[4122..IMAGE_PATH_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn identical_entries_encode_identically() {
        let a = encode(&friday("Rain", "same"));
        let b = encode(&friday("Rain", "same"));
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_content_is_truncated_to_capacity() {
        let e = friday("Sunny", &"x".repeat(5000));
        let block = encode(&e);
        assert_eq!(block.len(), RECORD_SIZE);
        assert_eq!(block[WEEKDAY_OFFSET - 1], 0);

        let decoded = decode(&block).unwrap();
        assert_eq!(decoded.content().len(), CONTENT_SIZE - 1);
    }

    #[test]
    fn decode_rejects_wrong_width() {
        let block = encode(&friday("Sunny", "Body"));
        let short = decode(&block[..RECORD_SIZE - 1]).unwrap_err();
        assert_eq!(short.len, RECORD_SIZE - 1);
        assert!(short.to_string().contains("4405"));

        let mut long = block.to_vec();
        long.push(0);
        assert!(decode(&long).is_err());
    }
}
