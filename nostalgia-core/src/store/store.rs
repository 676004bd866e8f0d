//! The append-only data file and its query protocol.

use super::store_error::StoreError;
use crate::dates::Clock;
use crate::record::{Entry, RECORD_SIZE, decode, encode};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RECORD_WIDTH: u64 = RECORD_SIZE as u64;

/// Owns the data file: a headerless sequence of fixed-width records, oldest first.
///
/// Every call opens the file, does its work and closes it again, so nothing
/// is cached between calls. Queries scan the whole file.
///
/// There is no locking. Two processes appending at the same time may
/// interleave their writes.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    clock: Clock,
}

impl Store {
    /// A store backed by `path`, dating new entries with the system clock.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Clock::System)
    }

    pub fn with_clock(path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Appends a new entry dated today and returns it as stored.
    ///
    /// - Creates the data file, and its parent directory, if needed.
    /// - Weather and content are truncated to their field capacity.
    /// - The file grows by exactly one record; earlier records are never rewritten.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Write`] if the file cannot be opened or the record cannot
    ///   be written. A partially written record is truncated away first.
    /// - [`StoreError::TornWrite`] if that truncation fails as well.
    /// - [`StoreError::Corrupt`] if the file is already misaligned; appending
    ///   would put the new record at a wrong offset.
    pub fn append(&self, weather: &str, content: &str) -> Result<Entry, StoreError> {
        let entry = Entry::new(self.clock.today(), weather, content);
        let block = encode(&entry);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        let start = file
            .metadata()
            .map_err(|source| self.write_error(source))?
            .len();
        if start % RECORD_WIDTH != 0 {
            warn!(
                path = %self.path.display(),
                len = start,
                "refusing to append to a misaligned store"
            );
            return Err(self.corrupt(start));
        }

        self.write_block(&mut file, &block, start, |file, len| file.set_len(len))?;

        debug!(
            path = %self.path.display(),
            index = start / RECORD_WIDTH,
            date = entry.date(),
            "appended record"
        );
        Ok(entry)
    }

    /// Returns every entry whose date equals `date`, in the order they were written.
    ///
    /// `date` is compared as text against the stored `YYYY-MM-DD` form. No match
    /// gives an empty vector.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Read`] if the file cannot be opened or read, including
    ///   when it does not exist yet.
    /// - [`StoreError::Corrupt`] if its length is not a multiple of the record
    ///   width. Nothing is returned in that case.
    pub fn query(&self, date: &str) -> Result<Vec<Entry>, StoreError> {
        let mut file = File::open(&self.path).map_err(|source| self.read_error(source))?;
        let len = self.checked_len(&file)?;

        let mut bytes = Vec::with_capacity(len as usize);
        file.read_to_end(&mut bytes)
            .map_err(|source| self.read_error(source))?;
        // The file may have changed between the size check and the read.
        if bytes.len() % RECORD_SIZE != 0 {
            warn!(path = %self.path.display(), len = bytes.len(), "store changed while reading");
            return Err(self.corrupt(bytes.len() as u64));
        }

        let mut matches = Vec::new();
        for block in bytes.chunks_exact(RECORD_SIZE) {
            let entry = decode(block)?;
            if entry.date() == date {
                matches.push(entry);
            }
        }
        debug!(
            path = %self.path.display(),
            scanned = bytes.len() / RECORD_SIZE,
            matched = matches.len(),
            date,
            "query finished"
        );
        Ok(matches)
    }

    /// Number of records in the file, from its length alone. A missing file holds none.
    pub fn record_count(&self) -> Result<u64, StoreError> {
        match File::open(&self.path) {
            Ok(file) => Ok(self.checked_len(&file)? / RECORD_WIDTH),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(source) => Err(self.read_error(source)),
        }
    }

    /// Reads the record at `index` (0 is the oldest) without scanning the file.
    ///
    /// Returns `None` past the last record or when the file does not exist.
    pub fn get(&self, index: u64) -> Result<Option<Entry>, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.read_error(source)),
        };
        let count = self.checked_len(&file)? / RECORD_WIDTH;
        if index >= count {
            return Ok(None);
        }

        let mut block = [0u8; RECORD_SIZE];
        file.seek(SeekFrom::Start(index * RECORD_WIDTH))
            .and_then(|_| file.read_exact(&mut block))
            .map_err(|source| self.read_error(source))?;
        Ok(Some(decode(&block)?))
    }

    /// Truncates a torn trailing record so the file is a whole number of records again.
    ///
    /// Returns the number of bytes removed; `0` when the file was already aligned
    /// or does not exist. Complete records are never touched.
    pub fn repair(&self) -> Result<u64, StoreError> {
        let file = match OpenOptions::new().write(true).open(&self.path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(self.write_error(source)),
        };
        let len = file
            .metadata()
            .map_err(|source| self.read_error(source))?
            .len();
        let torn = len % RECORD_WIDTH;
        if torn == 0 {
            return Ok(0);
        }

        let aligned = len - torn;
        file.set_len(aligned)
            .and_then(|()| file.sync_all())
            .map_err(|source| self.write_error(source))?;
        warn!(
            path = %self.path.display(),
            removed = torn,
            len = aligned,
            "truncated torn record"
        );
        Ok(torn)
    }

    /// Writes `block` to `out`, which is `start` bytes long, and flushes it.
    ///
    /// On failure `truncate` cuts `out` back to `start` so no partial record
    /// stays behind.
    fn write_block<W: Write>(
        &self,
        out: &mut W,
        block: &[u8],
        start: u64,
        truncate: impl FnOnce(&mut W, u64) -> io::Result<()>,
    ) -> Result<(), StoreError> {
        let Err(source) = out.write_all(block).and_then(|()| out.flush()) else {
            return Ok(());
        };
        warn!(
            path = %self.path.display(),
            len = start,
            error = %source,
            "record write failed, rolling back"
        );
        match truncate(out, start) {
            Ok(()) => Err(self.write_error(source)),
            Err(_) => Err(StoreError::TornWrite {
                path: self.path.clone(),
                len: start,
                source,
            }),
        }
    }

    /// File length, rejected unless it is a whole number of records.
    fn checked_len(&self, file: &File) -> Result<u64, StoreError> {
        let len = file
            .metadata()
            .map_err(|source| self.read_error(source))?
            .len();
        if len % RECORD_WIDTH != 0 {
            warn!(
                path = %self.path.display(),
                len,
                "store length is not a multiple of the record width"
            );
            return Err(self.corrupt(len));
        }
        Ok(len)
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, len: u64) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            len,
        }
    }
}
