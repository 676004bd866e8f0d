use std::fmt;

/// Text that fits in an `N`-byte wire field, terminator included.
///
/// The truncation policy is applied once, at construction:
/// - the input is cut at its first NUL, since NUL terminates the field on disk;
/// - what remains is shortened to at most `N - 1` bytes, backing off to the
///   previous UTF-8 character boundary so a character is never split.
///
/// Any `FixedText<N>` therefore always fits its field with room for the terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize> {
    text: String,
}

impl<const N: usize> FixedText<N> {
    /// Largest number of text bytes the field holds.
    pub const CAPACITY: usize = N - 1;

    pub fn new(input: &str) -> Self {
        let visible = match input.find('\0') {
            Some(nul) => &input[..nul],
            None => input,
        };
        let mut end = visible.len().min(Self::CAPACITY);
        while !visible.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            text: visible[..end].to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copies the text into `field` and zero-fills the rest.
    ///
    /// `field` must be exactly `N` bytes.
    pub(crate) fn write_to(&self, field: &mut [u8]) {
        debug_assert_eq!(field.len(), N);
        let bytes = self.text.as_bytes();
        field[..bytes.len()].copy_from_slice(bytes);
        field[bytes.len()..].fill(0);
    }

    /// Reads the text up to the first NUL. Invalid UTF-8 becomes U+FFFD.
    pub(crate) fn read_from(field: &[u8]) -> Self {
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        Self::new(&String::from_utf8_lossy(&field[..end]))
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
